// End-to-end engine scenarios over the built-in network

use hub_delivery::utils::init_network::default_network;
use hub_delivery::{DeliveryPlanner, NearestFirst, Order};

fn create_planner() -> DeliveryPlanner {
    DeliveryPlanner::new(default_network().expect("built-in network must validate"))
}

#[test]
fn test_single_center_order() {
    let planner = create_planner();
    let mut order = Order::new();
    order.add_item("A", 1.0);

    // weight 3 from C1: distance 4 * rate 10
    assert_eq!(planner.minimum_cost(&order), 40.0);
}

#[test]
fn test_heavy_item_uses_upper_tier() {
    let planner = create_planner();
    let mut order = Order::new();
    order.add_item("D", 1.0);

    // weight 12 from C2: distance 2.5 * rate 8
    assert_eq!(planner.minimum_cost(&order), 20.0);
}

#[test]
fn test_two_center_order_picks_cheaper_visiting_order() {
    let planner = create_planner();
    let mut order = Order::new();
    order.add_item("A", 1.0);
    order.add_item("D", 1.0);

    // [C1, C2] = 40 + 25 + 20 = 85; [C2, C1] = 20 + 40 + 40 = 100
    assert_eq!(planner.minimum_cost(&order), 85.0);
}

#[test]
fn test_three_center_order() {
    let planner = create_planner();
    let mut order = Order::new();
    order.add_item("A", 1.0);
    order.add_item("D", 1.0);
    order.add_item("G", 1.0);

    // Loaded legs always total 40 + 20 + 20; the cheapest start skips the
    // most expensive empty leg (C1 at 40): 80 + 25 + 20 = 125
    assert_eq!(planner.minimum_cost(&order), 125.0);
}

#[test]
fn test_unknown_product_costs_nothing() {
    let planner = create_planner();
    let mut order = Order::new();
    order.add_item("Z", 5.0);

    assert_eq!(planner.minimum_cost(&order), 0.0);
}

#[test]
fn test_empty_order_costs_nothing() {
    let planner = create_planner();

    assert_eq!(planner.minimum_cost(&Order::new()), 0.0);
}

#[test]
fn test_negative_quantities_are_treated_as_absent() {
    let planner = create_planner();
    let mut order = Order::new();
    order.items.insert("A".to_owned(), -2.0);

    assert_eq!(planner.minimum_cost(&order), 0.0);
}

#[test]
fn test_crossing_a_tier_can_lower_the_rate() {
    let planner = create_planner();

    // 2 units of B weigh 4: distance 4 * rate 10
    let mut light = Order::new();
    light.add_item("B", 2.0);
    assert_eq!(planner.minimum_cost(&light), 40.0);

    // 3 units weigh 6, crossing into the cheaper tier: distance 4 * rate 8
    let mut heavy = Order::new();
    heavy.add_item("B", 3.0);
    assert_eq!(planner.minimum_cost(&heavy), 32.0);
}

#[test]
fn test_minimum_cost_does_not_mutate_the_order() {
    let planner = create_planner();
    let mut order = Order::new();
    order.add_item("A", 1.0);
    order.add_item("D", 1.0);

    let first = planner.minimum_cost(&order);
    assert_eq!(order.requested("A"), 1.0);
    assert_eq!(order.requested("D"), 1.0);

    let second = planner.minimum_cost(&order);
    assert_eq!(first, second);
}

#[test]
fn test_insertion_order_of_products_is_irrelevant() {
    let planner = create_planner();

    let mut forward = Order::new();
    forward.add_item("A", 1.0);
    forward.add_item("D", 1.0);

    let mut reversed = Order::new();
    reversed.add_item("D", 1.0);
    reversed.add_item("A", 1.0);

    assert_eq!(
        planner.minimum_cost(&forward),
        planner.minimum_cost(&reversed)
    );
}

#[test]
fn test_nearest_first_heuristic_visits_closest_center_first() {
    let network = default_network().expect("built-in network must validate");
    let planner = DeliveryPlanner::with_enumerator(network, Box::new(NearestFirst));

    let mut order = Order::new();
    order.add_item("A", 1.0);
    order.add_item("D", 1.0);

    // The greedy order is [C2, C1], which is not the optimum here
    assert_eq!(planner.minimum_cost(&order), 100.0);
}
