use contracts::domain::a001_user::{User, UserId, UserStatus};
use contracts::domain::a002_brand::{Brand, BrandId};
use contracts::domain::a003_category::Category;
use contracts::domain::a004_product::{CatalogForm, ProductId};
use contracts::domain::common::{Confirmed, EntityStore, FixedAnswer};
use contracts::shared::metadata::FormValues;
use contracts::shared::modal::FormMode;
use contracts::shared::seed::seed_data;

fn name(value: &str) -> FormValues {
    FormValues::from([("name", value)])
}

#[test]
fn create_after_seed_takes_next_id() {
    let mut brands = EntityStore::seeded(vec![Brand {
        id: BrandId(1),
        name: "Toyota".into(),
    }]);

    let created = brands.create(&name("Komatsu")).unwrap().clone();

    assert_eq!(created.id, BrandId(2));
    assert_eq!(created.name, "Komatsu");
    let ids: Vec<BrandId> = brands.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![BrandId(1), BrandId(2)]);
}

#[test]
fn ids_stay_monotonic_after_deletes() {
    let mut categories: EntityStore<Category> = EntityStore::new();
    let mut assigned = Vec::new();

    for label in ["Engine Parts", "Hydraulic Systems", "Brake Systems"] {
        assigned.push(categories.create(&name(label)).unwrap().id);
    }
    let last = assigned[2];
    categories.remove(last).unwrap();
    categories.remove(assigned[0]).unwrap();

    let next = categories.create(&name("Filters")).unwrap().id;
    assert!(assigned.iter().all(|id| *id < next));
    assert_eq!(categories.len(), 2);
}

#[test]
fn removed_record_cannot_be_updated() {
    let seed = seed_data().unwrap();
    let mut users = seed.user_store();
    let before = users.len();

    users.remove(UserId(2)).unwrap();
    let err = users
        .update(
            UserId(2),
            &FormValues::from([
                ("name", "Bob Smith"),
                ("email", "bob@example.com"),
                ("role", "User"),
            ]),
        )
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(users.len(), before - 1);
    assert!(users.get(UserId(2)).is_none());
}

#[test]
fn one_character_names_fail_everywhere() {
    let seed = seed_data().unwrap();
    let mut users = seed.user_store();
    let mut catalog = seed.catalog();

    let user = users
        .create(&FormValues::from([
            ("name", "A"),
            ("email", "a@example.com"),
            ("role", "User"),
        ]))
        .unwrap_err();
    assert_eq!(
        user.validation().unwrap().get("name"),
        Some("Name must be at least 2 characters")
    );

    let product = catalog
        .submit(
            CatalogForm::Product(FormMode::Create),
            &FormValues::from([
                ("name", "X"),
                ("brand_id", "1"),
                ("category_id", "1"),
                ("price", "10"),
            ]),
        )
        .unwrap_err();
    assert!(product.validation().unwrap().get("name").is_some());

    for form in [
        CatalogForm::Brand(FormMode::Create),
        CatalogForm::Category(FormMode::Create),
    ] {
        assert!(catalog.submit(form, &name("Z")).is_err());
        assert!(catalog.submit(form, &name("ZF")).is_ok());
    }
}

#[test]
fn product_without_brand_is_rejected() {
    let mut catalog = seed_data().unwrap().catalog();
    let before = catalog.products.clone();

    let err = catalog
        .submit(
            CatalogForm::Product(FormMode::Create),
            &FormValues::from([
                ("name", "Hydraulic Hose"),
                ("brand_id", "0"),
                ("category_id", "2"),
                ("price", "45.5"),
            ]),
        )
        .unwrap_err();

    assert_eq!(
        err.validation().unwrap().get("brand_id"),
        Some("Please select a brand")
    );
    assert_eq!(catalog.products, before);
}

#[test]
fn ban_and_activate_round_trip() {
    let mut users = seed_data().unwrap().user_store();
    let original: User = users.get(UserId(1)).unwrap().clone();

    users.set_status(UserId(1), UserStatus::Banned).unwrap();
    users.set_status(UserId(1), UserStatus::Active).unwrap();

    assert_eq!(users.get(UserId(1)), Some(&original));
}

#[test]
fn declined_confirmation_changes_nothing() {
    let seed = seed_data().unwrap();
    let mut users = seed.user_store();
    let mut catalog = seed.catalog();
    let users_before = users.clone();
    let catalog_before = catalog.clone();

    let declined = users
        .remove_confirmed(UserId(1), &FixedAnswer(false), "Delete?")
        .unwrap();
    assert_eq!(declined, Confirmed::Declined);
    assert!(!users.ban(UserId(2), &FixedAnswer(false), "Ban?").unwrap().is_done());
    assert!(!catalog
        .products
        .remove_confirmed(ProductId(1), &|_: &str| false, "Delete?")
        .unwrap()
        .is_done());

    assert_eq!(users, users_before);
    assert_eq!(catalog, catalog_before);
}

#[test]
fn edited_product_keeps_its_position() {
    let mut catalog = seed_data().unwrap().catalog();

    catalog
        .submit(
            CatalogForm::Product(FormMode::Edit(ProductId(2))),
            &FormValues::from([
                ("name", "Hydraulic Pump HP-200"),
                ("brand_id", "2"),
                ("category_id", "2"),
                ("price", "1350"),
                ("description", "Gear pump for Komatsu loaders"),
            ]),
        )
        .unwrap();

    let product = &catalog.products.items()[1];
    assert_eq!(product.id, ProductId(2));
    assert_eq!(product.price, 1350.0);
    assert_eq!(
        product.description.as_deref(),
        Some("Gear pump for Komatsu loaders")
    );
    assert_eq!(catalog.products.len(), 3);
}
