use line_restaurant_bot::cart::{Cart, CartStore, MemoryCartStore};

#[test]
fn totals_follow_add_and_remove_sequences() {
    let mut cart = Cart::default();
    cart.add_item("padthai", 60);
    cart.add_item("padthai", 60);
    cart.add_item("icedtea", 25);
    cart.remove_item("icedtea");
    cart.add_item("tomyum", 120);

    let expected: i64 = cart
        .items
        .values()
        .map(|entry| entry.unit_price * entry.quantity as i64)
        .sum();
    assert_eq!(cart.total(), expected);
    assert_eq!(cart.total(), 240);
    assert!(cart.items.values().all(|entry| entry.quantity > 0));
}

#[test]
fn padthai_twice_totals_120_and_renders_in_summary() {
    let mut cart = Cart::default();
    cart.add_item("padthai", 60);
    cart.add_item("padthai", 60);

    assert_eq!(cart.total(), 120);

    let summary = cart.summary(|id| id.to_string());
    assert!(summary.contains("x2"), "summary was: {summary}");
    assert!(summary.contains("120"), "summary was: {summary}");
}

#[test]
fn remove_on_absent_item_is_a_noop() {
    let mut cart = Cart::default();
    cart.add_item("somtam", 50);

    cart.remove_item("tomyum");

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.total(), 50);
}

#[test]
fn remove_to_zero_deletes_the_entry() {
    let mut cart = Cart::default();
    cart.add_item("somtam", 50);
    cart.remove_item("somtam");

    assert!(!cart.items.contains_key("somtam"));
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0);
}

#[test]
fn summary_keeps_insertion_order() {
    let mut cart = Cart::default();
    cart.add_item("icedtea", 25);
    cart.add_item("padthai", 60);

    let summary = cart.summary(|id| id.to_string());
    let icedtea = summary.find("icedtea").expect("icedtea line");
    let padthai = summary.find("padthai").expect("padthai line");
    assert!(icedtea < padthai, "summary was: {summary}");
}

// Two near-simultaneous add postbacks for the same user must both land;
// a lost update would leave quantity 1.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_for_one_user_serialize() {
    let store = MemoryCartStore::default();

    let first = store.entry("user-1");
    let second = store.entry("user-1");

    let add_one = tokio::spawn(async move {
        first.lock().await.add_item("padthai", 60);
    });
    let add_two = tokio::spawn(async move {
        second.lock().await.add_item("padthai", 60);
    });
    add_one.await.expect("task one");
    add_two.await.expect("task two");

    let cart = store.entry("user-1");
    let cart = cart.lock().await;
    assert_eq!(cart.items["padthai"].quantity, 2);
    assert_eq!(cart.total(), 120);
}

#[tokio::test]
async fn store_creates_carts_lazily_and_hands_out_the_same_cart() {
    let store = MemoryCartStore::default();

    {
        let cart = store.entry("user-1");
        let mut cart = cart.lock().await;
        assert!(cart.is_empty());
        cart.add_item("mangorice", 60);
    }

    let cart = store.entry("user-1");
    let cart = cart.lock().await;
    assert_eq!(cart.items["mangorice"].quantity, 1);
}
