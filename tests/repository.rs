use chrono::{NaiveDate, NaiveTime};

use svasta::domain::cart::NewCartItem;
use svasta::domain::learning_class::NewLearningClass;
use svasta::domain::order::{NewOrder, OrderStatus, UpdateOrder};
use svasta::domain::webinar::NewWebinar;
use svasta::repository::{
    CartReader, CartWriter, DieselRepository, LearningClassReader, LearningClassWriter,
    OrderReader, OrderWriter, WebinarReader, WebinarWriter,
};

mod common;

#[test]
fn test_order_create_then_list() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_order(
            &NewOrder::new(7, 3)
                .with_medicine("Amoxicillin")
                .with_quantity(2),
        )
        .unwrap();

    assert_eq!(created.status.as_str(), "Pending");

    let orders = repo.list_orders_by_user(7).unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0], created);
    assert_eq!(orders[0].pharmacy_id, 3);
    assert_eq!(orders[0].medicine, "Amoxicillin");
    assert_eq!(orders[0].quantity, 2);
}

#[test]
fn test_order_defaults_are_stored() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo.create_order(&NewOrder::new(1, 1)).unwrap();

    let stored = repo.get_order_by_id(created.id).unwrap().unwrap();
    assert_eq!(stored.medicine, "DemoMed");
    assert_eq!(stored.quantity, 1);
    assert_eq!(stored.status, OrderStatus::pending());
}

#[test]
fn test_order_ids_increase() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo.create_order(&NewOrder::new(1, 1)).unwrap();
    let second = repo.create_order(&NewOrder::new(1, 1)).unwrap();

    assert!(second.id > first.id);
}

#[test]
fn test_update_of_missing_order_is_noop() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let existing = repo.create_order(&NewOrder::new(2, 1)).unwrap();

    let affected = repo
        .update_order(9999, &UpdateOrder::new("Shipped"))
        .unwrap();

    assert_eq!(affected, 0);
    assert!(repo.get_order_by_id(9999).unwrap().is_none());
    assert_eq!(repo.list_orders_by_user(2).unwrap(), vec![existing]);
}

#[test]
fn test_status_overwrite_without_transition_rules() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let order = repo.create_order(&NewOrder::new(4, 2)).unwrap();

    assert_eq!(
        repo.update_order(order.id, &UpdateOrder::new("Delivered"))
            .unwrap(),
        1
    );
    let delivered = repo.get_order_by_id(order.id).unwrap().unwrap();
    assert_eq!(delivered.status.as_str(), "Delivered");

    repo.update_order(order.id, &UpdateOrder::new(OrderStatus::PENDING))
        .unwrap();
    let reverted = repo.get_order_by_id(order.id).unwrap().unwrap();
    assert_eq!(reverted.status.as_str(), "Pending");

    repo.update_order(order.id, &UpdateOrder::default()).unwrap();
    let preparing = repo.get_order_by_id(order.id).unwrap().unwrap();
    assert_eq!(preparing.status.as_str(), "Preparing");
    assert_eq!(preparing.medicine, order.medicine);
}

#[test]
fn test_list_is_isolated_by_user() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    for round in 0..5 {
        for user_id in [10, 20, 30] {
            repo.create_order(&NewOrder::new(user_id, 1).with_quantity(round + 1))
                .unwrap();
        }
    }

    for user_id in [10, 20, 30] {
        let orders = repo.list_orders_by_user(user_id).unwrap();
        assert_eq!(orders.len(), 5);
        assert!(orders.iter().all(|order| order.user_id == user_id));
        let quantities: Vec<i32> = orders.iter().map(|order| order.quantity).collect();
        assert_eq!(quantities, vec![1, 2, 3, 4, 5]);
    }

    assert!(repo.list_orders_by_user(40).unwrap().is_empty());
}

fn webinar(title: &str, upload_date: NaiveDate) -> NewWebinar {
    NewWebinar {
        title: title.to_string(),
        description: "Session notes".to_string(),
        video_url: "https://videos.example.com/session".to_string(),
        uploaded_by: "Dr. Rao".to_string(),
        upload_date,
    }
}

#[test]
fn test_webinars_newest_first() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let mar = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    repo.create_webinar(&webinar("January", jan)).unwrap();
    repo.create_webinar(&webinar("March", mar)).unwrap();
    repo.create_webinar(&webinar("March again", mar)).unwrap();

    let titles: Vec<String> = repo
        .list_webinars()
        .unwrap()
        .into_iter()
        .map(|webinar| webinar.title)
        .collect();

    assert_eq!(titles, vec!["March again", "March", "January"]);
}

fn class(title: &str, date: NaiveDate, time: NaiveTime) -> NewLearningClass {
    NewLearningClass {
        title: title.to_string(),
        description: "Live session".to_string(),
        meeting_link: "https://meet.example.com/room".to_string(),
        date,
        time,
        uploaded_by: "Clinic".to_string(),
    }
}

#[test]
fn test_classes_in_chronological_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let may_2 = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    let may_10 = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let morning = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let evening = NaiveTime::from_hms_opt(18, 30, 0).unwrap();

    repo.create_learning_class(&class("later day", may_10, morning))
        .unwrap();
    let stored = repo
        .create_learning_class(&class("evening", may_2, evening))
        .unwrap();
    repo.create_learning_class(&class("morning", may_2, morning))
        .unwrap();

    assert_eq!(stored.time, evening);

    let titles: Vec<String> = repo
        .list_learning_classes()
        .unwrap()
        .into_iter()
        .map(|class| class.title)
        .collect();

    assert_eq!(titles, vec!["morning", "evening", "later day"]);
}

#[test]
fn test_cart_add_increments_existing_line() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.add_cart_item(&NewCartItem::new("Aspirin", 30.0)).unwrap();
    repo.add_cart_item(&NewCartItem::new("Calpol", 40.0)).unwrap();
    repo.add_cart_item(&NewCartItem::new("Aspirin", 99.0)).unwrap();

    let cart = repo.list_cart_items().unwrap();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart[0].product, "Aspirin");
    assert_eq!(cart[0].quantity, 2);
    assert_eq!(cart[0].price, 30.0);
    assert_eq!(cart[1].product, "Calpol");
    assert_eq!(cart[1].quantity, 1);
}

#[test]
fn test_cart_remove_decrements_then_drops_line() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.add_cart_item(&NewCartItem::new("Cetirizine", 20.0)).unwrap();
    repo.add_cart_item(&NewCartItem::new("Cetirizine", 20.0)).unwrap();

    assert!(repo.remove_cart_item("Cetirizine").unwrap());
    assert_eq!(repo.list_cart_items().unwrap()[0].quantity, 1);

    assert!(repo.remove_cart_item("Cetirizine").unwrap());
    assert!(repo.list_cart_items().unwrap().is_empty());

    assert!(!repo.remove_cart_item("Cetirizine").unwrap());
}
