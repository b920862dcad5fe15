//! End-to-end shopper scenarios: the pages' view of the system, from
//! search through checkout to order history, all against a provider-scoped
//! store.

use kathsnap_core::{OrderId, OrderStatus, PaymentMethod, ProductId};
use rust_decimal::Decimal;
use kathsnap_integration_tests::{init_tracing, sample_catalog, user};
use kathsnap_store::storage::MemoryStorage;
use kathsnap_store::{AppProvider, AppStore, use_app};
use kathsnap_storefront::checkout::{DeliveryDetails, Promo, cart_totals, place_order};
use kathsnap_storefront::orders::filter_by_status;
use kathsnap_storefront::{Catalog, SearchQuery};

fn provider() -> AppProvider {
    AppProvider::new(AppStore::open(MemoryStorage::new()))
}

fn delivery() -> DeliveryDetails {
    DeliveryDetails {
        name: "Asha Shrestha".to_owned(),
        phone: "+977 9841234567".to_owned(),
        address: "Thamel, Kathmandu".to_owned(),
        city: "Kathmandu".to_owned(),
        instructions: "Ring the bell twice".to_owned(),
    }
}

#[test]
fn search_add_to_cart_and_check_out() {
    init_tracing();
    let (products, vendors) = sample_catalog();
    let catalog = Catalog::new(products, vendors);

    provider().scope(|| {
        let app = use_app();
        app.login(user("Asha"));

        // the search page filters the catalog by the stored query
        app.set_search_query("grocery");
        let query = SearchQuery::parse(&app.state().search_query).expect("non-empty query");
        let hits = catalog.search(&query);
        assert_eq!(hits.len(), 2);

        // add everything the search found, apples twice
        for product in &hits {
            app.add_to_cart((*product).clone());
        }
        app.add_to_cart(hits[0].clone());
        assert_eq!(app.state().cart_count(), 3);

        // the cart page prices the state's cart with the promo applied
        let promo = Promo::parse("SAVE10").expect("known code");
        let state = app.state();
        let totals = cart_totals(&state, Some(&promo)).expect("cart prices out");
        assert_eq!(totals.subtotal, Decimal::from(750));

        let order = place_order(
            OrderId::new(1),
            &state.cart,
            &delivery(),
            PaymentMethod::Card,
            Some(&promo),
        )
        .expect("order places");

        // apples ₹150 x 2 + coffee ₹450 = 750: free shipping, 5% tax, 10% off
        assert_eq!(order.reference(), "ORD-001");
        assert!(order.totals.free_shipping());
        assert_eq!(order.totals.subtotal, Decimal::from(750));
        assert_eq!(order.totals.total, Decimal::new(712_50, 2));

        // placing an order empties the cart, nothing else
        app.clear_cart();
        let state = app.state();
        assert!(state.cart.is_empty());
        assert!(state.is_logged_in());
    });
}

#[test]
fn wishlist_move_to_cart_flow() {
    init_tracing();
    let (products, _) = sample_catalog();

    provider().scope(|| {
        let app = use_app();

        // saving twice keeps a single entry
        app.add_to_wishlist(products[1].clone());
        app.add_to_wishlist(products[1].clone());
        assert_eq!(app.state().wishlist.len(), 1);

        // "move to cart" on the wishlist page
        app.add_to_cart(products[1].clone());
        app.remove_from_wishlist(products[1].id);

        let state = app.state();
        assert!(state.wishlist.is_empty());
        assert_eq!(state.cart_quantity(ProductId::new(2)), Some(1));
    });
}

#[test]
fn order_history_tabs() {
    init_tracing();
    let (products, _) = sample_catalog();
    let items = vec![kathsnap_core::CartItem::new(products[2].clone())];

    let mut delivered = place_order(
        OrderId::new(1),
        &items,
        &delivery(),
        PaymentMethod::Cash,
        None,
    )
    .expect("order places");
    delivered.mark_in_transit().expect("placed -> in-transit");
    delivered.mark_delivered().expect("in-transit -> delivered");

    let mut cancelled = place_order(
        OrderId::new(2),
        &items,
        &delivery(),
        PaymentMethod::Wallet,
        None,
    )
    .expect("order places");
    cancelled.cancel().expect("placed -> cancelled");

    let orders = vec![delivered, cancelled];

    assert_eq!(filter_by_status(&orders, None).len(), 2);
    assert_eq!(
        filter_by_status(&orders, Some(OrderStatus::Delivered))[0].reference(),
        "ORD-001"
    );
    assert!(filter_by_status(&orders, Some(OrderStatus::InTransit)).is_empty());
}

#[test]
fn empty_search_query_is_a_recoverable_input_error() {
    init_tracing();
    provider().scope(|| {
        let app = use_app();
        app.set_search_query("   ");

        let result = SearchQuery::parse(&app.state().search_query);
        assert!(result.is_err());

        // the page surfaces it as a transient notice; state is untouched
        app.set_error(Some("Try adjusting your search terms".to_owned()));
        assert_eq!(
            app.state().error.as_deref(),
            Some("Try adjusting your search terms")
        );
        app.set_error(None);
        assert!(app.state().error.is_none());
    });
}

#[test]
#[should_panic(expected = "use_app() called outside of an AppProvider scope")]
fn use_app_without_provider_fails_fast() {
    let _ = use_app();
}
