//! JSON-facing records.
//!
//! Ids are optional: a record without an id is new, a record with one targets
//! an existing row. Field names match the existing clients (`idStudent`,
//! `firstName`, ...).

use chrono::NaiveDate;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use models::{course, department, enrollment, student, Status};

/// Record persisted through a `Repository`.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in logs and not-found messages.
    const ENTITY: &'static str;

    fn id(&self) -> Option<i32>;
    fn set_id(&mut self, id: i32);
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "idStudent")]
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "idDepartment")]
    pub id: Option<i32>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub head: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "idCourse")]
    pub id: Option<i32>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub credit: Option<i32>,
    pub description: Option<String>,
}

/// On input only the ids of `student` and `course` are read; on output they
/// carry the full referenced rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(rename = "idEnrollment")]
    pub id: Option<i32>,
    #[cfg_attr(feature = "openapi", schema(example = 18.5))]
    pub grade: Option<f64>,
    pub status: Option<Status>,
    #[cfg_attr(feature = "openapi", schema(example = "2024-10-01"))]
    pub enrollment_date: Option<NaiveDate>,
    pub student: Option<Student>,
    pub course: Option<Course>,
}

macro_rules! impl_record {
    ($ty:ty, $name:literal) => {
        impl Record for $ty {
            const ENTITY: &'static str = $name;

            fn id(&self) -> Option<i32> { self.id }
            fn set_id(&mut self, id: i32) { self.id = Some(id); }
        }
    };
}

impl_record!(Student, "student");
impl_record!(Department, "department");
impl_record!(Course, "course");
impl_record!(Enrollment, "enrollment");

impl From<student::Model> for Student {
    fn from(m: student::Model) -> Self {
        Self {
            id: Some(m.id),
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            address: m.address,
        }
    }
}

impl Student {
    /// Active model with every column set and the id left to the caller.
    pub fn into_active_model(self) -> student::ActiveModel {
        student::ActiveModel {
            id: NotSet,
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            email: Set(self.email),
            phone: Set(self.phone),
            address: Set(self.address),
        }
    }
}

impl From<department::Model> for Department {
    fn from(m: department::Model) -> Self {
        Self { id: Some(m.id), name: m.name, location: m.location, head: m.head, phone: m.phone }
    }
}

impl Department {
    pub fn into_active_model(self) -> department::ActiveModel {
        department::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            location: Set(self.location),
            head: Set(self.head),
            phone: Set(self.phone),
        }
    }
}

impl From<course::Model> for Course {
    fn from(m: course::Model) -> Self {
        Self { id: Some(m.id), name: m.name, code: m.code, credit: m.credit, description: m.description }
    }
}

impl Course {
    pub fn into_active_model(self) -> course::ActiveModel {
        course::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            code: Set(self.code),
            credit: Set(self.credit),
            description: Set(self.description),
        }
    }
}

impl Enrollment {
    /// Assemble from a row and its (optionally) loaded parents.
    pub fn from_parts(m: enrollment::Model, student: Option<student::Model>, course: Option<course::Model>) -> Self {
        Self {
            id: Some(m.id),
            grade: m.grade,
            status: m.status,
            enrollment_date: m.enrollment_date,
            student: student.map(Student::from),
            course: course.map(Course::from),
        }
    }

    pub fn student_id(&self) -> Option<i32> { self.student.as_ref().and_then(|s| s.id) }

    pub fn course_id(&self) -> Option<i32> { self.course.as_ref().and_then(|c| c.id) }

    pub fn into_active_model(self) -> enrollment::ActiveModel {
        let student_id = self.student_id();
        let course_id = self.course_id();
        enrollment::ActiveModel {
            id: NotSet,
            grade: Set(self.grade),
            status: Set(self.status),
            enrollment_date: Set(self.enrollment_date),
            student_id: Set(student_id),
            course_id: Set(course_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn student_uses_client_field_names() {
        let s = Student { id: Some(1), first_name: Some("Iheb".into()), ..Student::default() };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["idStudent"], 1);
        assert_eq!(v["firstName"], "Iheb");
        assert!(v["lastName"].is_null());
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let d: Department = serde_json::from_value(json!({"name": "Informatique"})).unwrap();
        assert_eq!(d.id, None);
        assert_eq!(d.name.as_deref(), Some("Informatique"));
        assert_eq!(d.head, None);
    }

    #[test]
    fn enrollment_reads_nested_reference_ids() {
        let e: Enrollment = serde_json::from_value(json!({
            "grade": 18.5,
            "status": "ACTIVE",
            "enrollmentDate": "2024-10-01",
            "student": {"idStudent": 3},
            "course": {"idCourse": 7, "name": "ignored on input"}
        }))
        .unwrap();
        assert_eq!(e.student_id(), Some(3));
        assert_eq!(e.course_id(), Some(7));
        assert_eq!(e.status, Some(Status::Active));
        assert_eq!(e.enrollment_date, NaiveDate::from_ymd_opt(2024, 10, 1));

        let am = e.into_active_model();
        assert_eq!(am.student_id, Set(Some(3)));
        assert_eq!(am.course_id, Set(Some(7)));
        assert_eq!(am.id, NotSet);
    }

    #[test]
    fn enrollment_reference_without_id_is_unset() {
        let e = Enrollment { student: Some(Student::default()), ..Enrollment::default() };
        assert_eq!(e.student_id(), None);
        assert_eq!(e.course_id(), None);
    }

    #[test]
    fn record_ids_round_through_set_id() {
        let mut c = Course::default();
        assert_eq!(c.id(), None);
        c.set_id(42);
        assert_eq!(c.id(), Some(42));
        assert_eq!(<Course as Record>::ENTITY, "course");
    }
}
