//! SeaORM-backed repositories, one per entity.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, EntityTrait, LoaderTrait};
use tracing::debug;

use models::{course, department, enrollment, student};

use super::Repository;
use crate::domain::{Course, Department, Enrollment, Student};
use crate::errors::ServiceError;

pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<Student> for SeaOrmStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
        let rows = student::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, ServiceError> {
        Ok(student::Entity::find_by_id(id).one(&self.db).await?.map(Student::from))
    }

    async fn save(&self, entity: Student) -> Result<Student, ServiceError> {
        let existing = match entity.id {
            Some(id) => student::Entity::find_by_id(id).one(&self.db).await?,
            None => None,
        };
        let mut am = entity.into_active_model();
        let saved = match existing {
            Some(row) => {
                am.id = Unchanged(row.id);
                am.update(&self.db).await?
            }
            None => am.insert(&self.db).await?,
        };
        debug!(id = saved.id, "student saved");
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let res = student::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!(id, rows = res.rows_affected, "student delete");
        Ok(())
    }
}

pub struct SeaOrmDepartmentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<Department> for SeaOrmDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, ServiceError> {
        let rows = department::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(Department::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, ServiceError> {
        Ok(department::Entity::find_by_id(id).one(&self.db).await?.map(Department::from))
    }

    async fn save(&self, entity: Department) -> Result<Department, ServiceError> {
        let existing = match entity.id {
            Some(id) => department::Entity::find_by_id(id).one(&self.db).await?,
            None => None,
        };
        let mut am = entity.into_active_model();
        let saved = match existing {
            Some(row) => {
                am.id = Unchanged(row.id);
                am.update(&self.db).await?
            }
            None => am.insert(&self.db).await?,
        };
        debug!(id = saved.id, "department saved");
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let res = department::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!(id, rows = res.rows_affected, "department delete");
        Ok(())
    }
}

pub struct SeaOrmCourseRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<Course> for SeaOrmCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, ServiceError> {
        let rows = course::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, ServiceError> {
        Ok(course::Entity::find_by_id(id).one(&self.db).await?.map(Course::from))
    }

    async fn save(&self, entity: Course) -> Result<Course, ServiceError> {
        let existing = match entity.id {
            Some(id) => course::Entity::find_by_id(id).one(&self.db).await?,
            None => None,
        };
        let mut am = entity.into_active_model();
        let saved = match existing {
            Some(row) => {
                am.id = Unchanged(row.id);
                am.update(&self.db).await?
            }
            None => am.insert(&self.db).await?,
        };
        debug!(id = saved.id, "course saved");
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let res = course::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!(id, rows = res.rows_affected, "course delete");
        Ok(())
    }
}

/// Enrollments are returned with their student and course rows attached.
pub struct SeaOrmEnrollmentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEnrollmentRepository {
    async fn hydrate(&self, rows: Vec<enrollment::Model>) -> Result<Vec<Enrollment>, ServiceError> {
        let students = rows.load_one(student::Entity, &self.db).await?;
        let courses = rows.load_one(course::Entity, &self.db).await?;
        Ok(rows
            .into_iter()
            .zip(students)
            .zip(courses)
            .map(|((row, s), c)| Enrollment::from_parts(row, s, c))
            .collect())
    }
}

#[async_trait]
impl Repository<Enrollment> for SeaOrmEnrollmentRepository {
    async fn find_all(&self) -> Result<Vec<Enrollment>, ServiceError> {
        let rows = enrollment::Entity::find().all(&self.db).await?;
        self.hydrate(rows).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Enrollment>, ServiceError> {
        let Some(row) = enrollment::Entity::find_by_id(id).one(&self.db).await? else { return Ok(None); };
        Ok(self.hydrate(vec![row]).await?.pop())
    }

    async fn save(&self, entity: Enrollment) -> Result<Enrollment, ServiceError> {
        let existing = match entity.id {
            Some(id) => enrollment::Entity::find_by_id(id).one(&self.db).await?,
            None => None,
        };
        let mut am = entity.into_active_model();
        let saved = match existing {
            Some(row) => {
                am.id = Unchanged(row.id);
                am.update(&self.db).await?
            }
            None => am.insert(&self.db).await?,
        };
        debug!(id = saved.id, student_id = ?saved.student_id, course_id = ?saved.course_id, "enrollment saved");
        self.hydrate(vec![saved]).await?.pop().ok_or_else(|| ServiceError::Db("saved enrollment vanished".into()))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let res = enrollment::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!(id, rows = res.rows_affected, "enrollment delete");
        Ok(())
    }
}
