use std::thread::sleep;
use std::time::Duration;

use product_catalog::domain::product::{NewProduct, UpdateProduct};
use product_catalog::domain::types::ProductId;
use product_catalog::pagination::PageRequest;
use product_catalog::repository::errors::RepositoryError;
use product_catalog::repository::{
    ProductFilter, ProductListQuery, ProductReader, ProductWriter,
};

mod common;

fn names(query: ProductListQuery, repo: &impl ProductReader) -> (usize, Vec<String>) {
    let (total, items) = repo.list_products(query).unwrap();
    (total, items.into_iter().map(|p| p.name).collect())
}

#[test]
fn test_product_repository_crud() {
    let test_db = common::TestDb::new("test_product_repository_crud.db");
    let repo = test_db.repository();

    let created = repo
        .create_product(&NewProduct::new("Camisa", "Camisa de lino"))
        .unwrap();
    assert!(created.id.get() > 0);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = repo.get_product_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    sleep(Duration::from_millis(10));
    let updated = repo
        .update_product(created.id, &UpdateProduct::new("Camisa azul", "Lino azul"))
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.name, "Camisa azul");
    assert_eq!(updated.description, "Lino azul");

    assert_eq!(repo.delete_product(created.id).unwrap(), 1);
    assert!(repo.get_product_by_id(created.id).unwrap().is_none());
    assert_eq!(repo.delete_product(created.id).unwrap(), 0);
}

#[test]
fn test_update_missing_product_is_not_found() {
    let test_db = common::TestDb::new("test_update_missing_product_is_not_found.db");
    let repo = test_db.repository();
    let (pantalon, _) = common::seed_catalog(&repo);

    let missing = ProductId::new(999).unwrap();
    let result = repo.update_product(missing, &UpdateProduct::new("x", "y"));
    assert!(matches!(result, Err(RepositoryError::NotFound)));

    let unchanged = repo.get_product_by_id(pantalon.id).unwrap().unwrap();
    assert_eq!(unchanged, pantalon);
    let (total, _) = repo.list_products(ProductListQuery::default()).unwrap();
    assert_eq!(total, 2);
}

#[test]
fn test_list_filters_by_name_and_description() {
    let test_db = common::TestDb::new("test_list_filters_by_name_and_description.db");
    let repo = test_db.repository();
    common::seed_catalog(&repo);

    let by_name = ProductListQuery::new(ProductFilter::new(Some("bonito".into()), None));
    assert_eq!(names(by_name, &repo), (1, vec!["Pantalon bonito".to_string()]));

    let by_description =
        ProductListQuery::new(ProductFilter::new(None, Some("Vaqueiro".into())));
    assert_eq!(
        names(by_description, &repo),
        (1, vec!["Vaqueiro curto".to_string()])
    );

    let both = ProductListQuery::new(ProductFilter::new(
        Some("o".into()),
        Some("verano".into()),
    ));
    assert_eq!(names(both, &repo).0, 2);

    let no_match = ProductListQuery::new(ProductFilter::new(Some("bonita".into()), None));
    assert_eq!(names(no_match, &repo), (0, vec![]));
}

#[test]
fn test_list_filter_is_case_sensitive_and_literal() {
    let test_db = common::TestDb::new("test_list_filter_is_case_sensitive_and_literal.db");
    let repo = test_db.repository();
    common::seed_catalog(&repo);
    repo.create_product(&NewProduct::new("100% algodon", "Camiseta_basica"))
        .unwrap();

    let upper = ProductListQuery::new(ProductFilter::new(Some("BONITO".into()), None));
    assert_eq!(names(upper, &repo).0, 0);

    let percent = ProductListQuery::new(ProductFilter::new(Some("%".into()), None));
    assert_eq!(names(percent, &repo), (1, vec!["100% algodon".to_string()]));

    let underscore = ProductListQuery::new(ProductFilter::new(None, Some("_".into())));
    assert_eq!(names(underscore, &repo), (1, vec!["100% algodon".to_string()]));
}

#[test]
fn test_list_paginates_in_id_order() {
    let test_db = common::TestDb::new("test_list_paginates_in_id_order.db");
    let repo = test_db.repository();
    for i in 1..=7 {
        repo.create_product(&NewProduct::new(format!("Product {i}"), "Stock item"))
            .unwrap();
    }

    let page = |index| {
        ProductListQuery::new(ProductFilter::All).paginate(PageRequest::new(index, 3).unwrap())
    };

    assert_eq!(
        names(page(0), &repo),
        (
            7,
            vec![
                "Product 1".to_string(),
                "Product 2".to_string(),
                "Product 3".to_string()
            ]
        )
    );
    assert_eq!(names(page(2), &repo), (7, vec!["Product 7".to_string()]));
    assert_eq!(names(page(3), &repo), (7, vec![]));
    assert_eq!(names(page(usize::MAX), &repo), (7, vec![]));
}

#[test]
fn test_list_is_idempotent() {
    let test_db = common::TestDb::new("test_list_is_idempotent.db");
    let repo = test_db.repository();
    common::seed_catalog(&repo);

    let query = ProductListQuery::new(ProductFilter::new(None, Some("verano".into())));
    let first = repo.list_products(query.clone()).unwrap();
    let second = repo.list_products(query).unwrap();
    assert_eq!(first, second);
}
