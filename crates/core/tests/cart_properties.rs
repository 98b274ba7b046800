//! Cart totals under arbitrary sequences of edits.

use kiosk::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::RUB};

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..6_usize).prop_map(Op::Add),
        1 => (0..8_usize).prop_map(Op::Remove),
    ]
}

fn products() -> Vec<Product<'static>> {
    [150_i64, 99_900, 300_000, 1, 0, 1_234_567]
        .into_iter()
        .enumerate()
        .map(|(n, minor)| {
            Product::new(
                n.to_string(),
                format!("Product {n}"),
                Money::from_minor(minor, RUB),
            )
        })
        .collect()
}

fn expected_total(cart: &Cart<'_>) -> i64 {
    cart.iter()
        .map(|line| line.product().price.to_minor_units() * i64::from(line.quantity()))
        .sum()
}

proptest! {
    #[test]
    fn total_matches_sum_of_lines(ops in prop::collection::vec(op(), 0..64)) {
        let catalog = products();
        let mut cart = Cart::new(RUB);

        for op in ops {
            match op {
                Op::Add(n) => {
                    if let Some(product) = catalog.get(n) {
                        prop_assert!(cart.add(product).is_ok());
                    }
                }
                Op::Remove(index) => {
                    let before = cart.len();
                    let removed = cart.remove(index);

                    if index < before {
                        prop_assert!(removed.is_ok());
                        prop_assert_eq!(cart.len(), before - 1);
                    } else {
                        prop_assert_eq!(removed, Err(CartError::LineNotFound(index)));
                        prop_assert_eq!(cart.len(), before);
                    }
                }
            }

            let total = cart.total();

            prop_assert_eq!(total, Ok(Money::from_minor(expected_total(&cart), RUB)));
        }
    }

    #[test]
    fn checkout_total_matches_cart_total(picks in prop::collection::vec(0..6_usize, 1..32)) {
        let catalog = products();
        let mut cart = Cart::new(RUB);

        for n in picks {
            if let Some(product) = catalog.get(n) {
                prop_assert!(cart.add(product).is_ok());
            }
        }

        let method = PaymentMethod::new("sber", "Sberbank", PaymentKind::Card);
        let payload = CheckoutPayload::from_cart(&cart, &method);

        prop_assert!(payload.is_ok());

        if let (Ok(payload), Ok(total)) = (payload, cart.total()) {
            let lines: Decimal = payload
                .products
                .iter()
                .map(|line| line.price * Decimal::from(line.quantity))
                .sum();

            prop_assert_eq!(payload.total, *total.amount());
            prop_assert_eq!(payload.total, lines);
            prop_assert_eq!(payload.item_count(), cart.item_count());
        }
    }
}

#[test]
fn empty_cart_produces_no_message() {
    let cart = Cart::new(RUB);
    let method = PaymentMethod::new("nspk", "QR NSPK", PaymentKind::Qr);
    let mut bridge = JsonBridge::new(Vec::new());

    if let Ok(payload) = CheckoutPayload::from_cart(&cart, &method) {
        let _sent = bridge.submit(&payload);
    }

    assert!(bridge.into_inner().is_empty());
}
