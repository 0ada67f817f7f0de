use composable_indexes::{btree, count, grouped, hashtable_unique, premap, sum, Collection};

#[derive(Debug, Clone)]
struct Order {
    order_id: u32,
    timestamp: u64,
    trader_name: String,
    quantity: u32,
}

fn main() {
    let mut orders = Collection::new((
        premap(|o: &Order| o.order_id, hashtable_unique()),
        premap(|o: &Order| o.timestamp, btree()),
        grouped(
            |o: &Order| o.trader_name.clone(),
            || (count(), premap(|o: &Order| o.quantity as u64, sum())),
        ),
    ));

    let o1 = orders.insert(Order {
        order_id: 1,
        timestamp: 111,
        trader_name: "John".to_string(),
        quantity: 5,
    });
    orders.insert(Order {
        order_id: 2,
        timestamp: 22,
        trader_name: "Tom".to_string(),
        quantity: 3,
    });
    orders.insert(Order {
        order_id: 3,
        timestamp: 33,
        trader_name: "Tom".to_string(),
        quantity: 7,
    });

    // Lookups answer with (id, value) envelopes straight off the indexes.
    println!(
        "earliest order: {:?}",
        orders.query(|(_, by_time, _)| by_time.min())
    );
    println!(
        "order #1: {:?}",
        orders.query(|(by_id, _, _)| by_id.get(&1))
    );

    let toms_book = orders.query(|(_, _, by_trader)| by_trader.get(&"Tom".to_string()));
    println!("Tom's orders (count, quantity): {toms_book:?}");

    // Reassign order #1 to Tom; the grouped index rebalances on its own.
    orders.adjust(o1, |o| Order {
        trader_name: "Tom".to_string(),
        ..o.clone()
    });
    println!(
        "after reassigning, John's book: {:?}",
        orders.query(|(_, _, by_trader)| by_trader.get(&"John".to_string()))
    );
    println!(
        "after reassigning, Tom's book: {:?}",
        orders.query(|(_, _, by_trader)| by_trader.get(&"Tom".to_string()))
    );

    let removed = orders.remove(o1);
    println!("removed {removed:?}");
    println!("{} orders remain", orders.len());
}
