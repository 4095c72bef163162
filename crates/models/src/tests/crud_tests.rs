use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, Set};

use super::setup_test_db;
use crate::{course, department, student};

#[tokio::test]
async fn student_insert_find_update_delete() -> anyhow::Result<()> {
    let db = setup_test_db().await?;

    let created = student::ActiveModel {
        id: NotSet,
        first_name: Set(Some("Iheb".into())),
        last_name: Set(Some("Jdey".into())),
        email: Set(Some("iheb@example.com".into())),
        phone: Set(None),
        address: Set(None),
    }
    .insert(&db)
    .await?;
    assert!(created.id > 0);

    let found = student::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found, created);

    let mut am: student::ActiveModel = found.into();
    am.phone = Set(Some("+216 20 000 000".into()));
    let updated = am.update(&db).await?;
    assert_eq!(updated.phone.as_deref(), Some("+216 20 000 000"));
    assert_eq!(updated.first_name.as_deref(), Some("Iheb"));

    student::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(student::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn course_keeps_credit_and_description() -> anyhow::Result<()> {
    let db = setup_test_db().await?;

    let created = course::ActiveModel {
        id: NotSet,
        name: Set(Some("DevOps Avancé".into())),
        code: Set(Some("DV200".into())),
        credit: Set(Some(5)),
        description: Set(Some("Cours sur l'intégration continue et le déploiement continu.".into())),
    }
    .insert(&db)
    .await?;

    let found = course::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found.name.as_deref(), Some("DevOps Avancé"));
    assert_eq!(found.credit, Some(5));
    Ok(())
}

#[tokio::test]
async fn department_ids_are_generated_sequentially() -> anyhow::Result<()> {
    let db = setup_test_db().await?;

    let mut ids = Vec::new();
    for name in ["Informatique", "Génie Civil", "Mécatronique"] {
        let d = department::ActiveModel {
            id: NotSet,
            name: Set(Some(name.into())),
            location: Set(Some("Bloc A".into())),
            head: Set(None),
            phone: Set(None),
        }
        .insert(&db)
        .await?;
        ids.push(d.id);
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(department::Entity::find().all(&db).await?.len(), 3);

    let res = department::Entity::delete_by_id(9_999).exec(&db).await?;
    assert_eq!(res.rows_affected, 0);
    assert_eq!(department::Entity::find().all(&db).await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn long_free_form_values_are_stored_unchanged() -> anyhow::Result<()> {
    let db = setup_test_db().await?;

    let address = "Rue de la République, ".repeat(100);
    let name = "Architecture des Systèmes Distribués ".repeat(20);
    let s = student::ActiveModel {
        id: NotSet,
        first_name: Set(Some("Iheb".into())),
        last_name: Set(None),
        email: Set(None),
        phone: Set(None),
        address: Set(Some(address.clone())),
    }
    .insert(&db)
    .await?;
    let c = course::ActiveModel {
        id: NotSet,
        name: Set(Some(name.clone())),
        code: Set(None),
        credit: Set(None),
        description: Set(None),
    }
    .insert(&db)
    .await?;

    let s = student::Entity::find_by_id(s.id).one(&db).await?.unwrap();
    let c = course::Entity::find_by_id(c.id).one(&db).await?.unwrap();
    assert_eq!(s.address, Some(address));
    assert_eq!(c.name, Some(name));
    Ok(())
}
