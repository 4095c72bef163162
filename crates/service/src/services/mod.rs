//! One service per entity over an injected `Repository`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use crate::domain::{Course, Department, Enrollment, Record, Student};
use crate::errors::ServiceError;
use crate::repository::mock::MockRepository;
use crate::repository::seaorm::{
    SeaOrmCourseRepository, SeaOrmDepartmentRepository, SeaOrmEnrollmentRepository, SeaOrmStudentRepository,
};
use crate::repository::Repository;

/// CRUD passthrough; absence is reported as `None`, never as an error.
pub struct CrudService<T: Record> {
    repo: Arc<dyn Repository<T>>,
}

pub type StudentService = CrudService<Student>;
pub type DepartmentService = CrudService<Department>;
pub type CourseService = CrudService<Course>;
pub type EnrollmentService = CrudService<Enrollment>;

impl<T: Record> CrudService<T> {
    pub fn new(repo: Arc<dyn Repository<T>>) -> Self { Self { repo } }

    #[instrument(skip(self), fields(entity = T::ENTITY))]
    pub async fn get_all(&self) -> Result<Vec<T>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self), fields(entity = T::ENTITY))]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<T>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Insert-or-update; no validation is applied.
    #[instrument(skip(self, entity), fields(entity = T::ENTITY, id = ?entity.id()))]
    pub async fn save(&self, entity: T) -> Result<T, ServiceError> {
        let is_new = entity.id().is_none();
        let saved = self.repo.save(entity).await?;
        info!(id = ?saved.id(), is_new, "saved");
        Ok(saved)
    }

    /// Never reports whether a row was actually removed.
    #[instrument(skip(self), fields(entity = T::ENTITY))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }
}

/// The four services wired over one backend.
#[derive(Clone)]
pub struct Services {
    pub students: Arc<StudentService>,
    pub departments: Arc<DepartmentService>,
    pub courses: Arc<CourseService>,
    pub enrollments: Arc<EnrollmentService>,
}

impl Services {
    pub fn new(
        students: Arc<dyn Repository<Student>>,
        departments: Arc<dyn Repository<Department>>,
        courses: Arc<dyn Repository<Course>>,
        enrollments: Arc<dyn Repository<Enrollment>>,
    ) -> Self {
        Self {
            students: Arc::new(CrudService::new(students)),
            departments: Arc::new(CrudService::new(departments)),
            courses: Arc::new(CrudService::new(courses)),
            enrollments: Arc::new(CrudService::new(enrollments)),
        }
    }

    /// SeaORM repositories sharing one connection pool.
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmStudentRepository { db: db.clone() }),
            Arc::new(SeaOrmDepartmentRepository { db: db.clone() }),
            Arc::new(SeaOrmCourseRepository { db: db.clone() }),
            Arc::new(SeaOrmEnrollmentRepository { db }),
        )
    }

    /// In-memory repositories; enrollments keep whatever nested records they were saved with.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MockRepository::<Student>::new()),
            Arc::new(MockRepository::<Department>::new()),
            Arc::new(MockRepository::<Course>::new()),
            Arc::new(MockRepository::<Enrollment>::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::Status;

    fn student_service() -> (Arc<MockRepository<Student>>, StudentService) {
        let repo = Arc::new(MockRepository::new());
        let svc = StudentService::new(repo.clone());
        (repo, svc)
    }

    #[tokio::test]
    async fn get_all_passes_through() -> Result<(), ServiceError> {
        let (repo, svc) = student_service();
        repo.save(Student { first_name: Some("Iheb".into()), ..Student::default() }).await?;
        repo.save(Student { first_name: Some("Sara".into()), ..Student::default() }).await?;
        let all = svc.get_all().await?;
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|s| s.first_name.as_deref() == Some("Iheb")));
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_missing_is_none() -> Result<(), ServiceError> {
        let (_repo, svc) = student_service();
        assert!(svc.get_by_id(99).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn save_then_get_returns_saved_record() -> Result<(), ServiceError> {
        let (_repo, svc) = student_service();
        let saved = svc
            .save(Student { first_name: Some("Amira".into()), email: Some("amira@example.com".into()), ..Student::default() })
            .await?;
        let id = saved.id.expect("generated id");
        assert_eq!(svc.get_by_id(id).await?, Some(saved));
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_silent_for_missing_ids() -> Result<(), ServiceError> {
        let (repo, svc) = student_service();
        let kept = svc.save(Student::default()).await?;
        svc.delete(1_000).await?;
        assert_eq!(repo.len().await, 1);
        svc.delete(kept.id.expect("generated id")).await?;
        assert!(repo.is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_services_share_one_database() -> anyhow::Result<()> {
        let services = Services::seaorm(get_db().await?);
        let s = services.students.save(Student { first_name: Some("Iheb".into()), ..Student::default() }).await?;
        let c = services
            .courses
            .save(Course { name: Some("DevOps".into()), code: Some("DV101".into()), credit: Some(4), ..Course::default() })
            .await?;
        let e = services
            .enrollments
            .save(Enrollment {
                grade: Some(18.5),
                status: Some(Status::Active),
                student: Some(Student { id: s.id, ..Student::default() }),
                course: Some(Course { id: c.id, ..Course::default() }),
                ..Enrollment::default()
            })
            .await?;

        let found = services.enrollments.get_by_id(e.id.unwrap()).await?.unwrap();
        assert_eq!(found.grade, Some(18.5));
        assert_eq!(found.status, Some(Status::Active));
        assert_eq!(found.student.and_then(|s| s.first_name), Some("Iheb".into()));

        services.students.delete(s.id.unwrap()).await?;
        assert!(services.enrollments.get_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn department_delete_removes_it_from_listing() -> anyhow::Result<()> {
        let services = Services::seaorm(get_db().await?);
        let a = services.departments.save(Department { name: Some("Informatique".into()), ..Department::default() }).await?;
        let b = services.departments.save(Department { name: Some("Génie Civil".into()), ..Department::default() }).await?;
        services.departments.delete(a.id.unwrap()).await?;
        let ids: Vec<_> = services.departments.get_all().await?.into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![b.id]);
        Ok(())
    }
}
