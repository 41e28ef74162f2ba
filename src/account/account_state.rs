use crate::types::order::Order;
use crate::types::position::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    pub positions: Vec<Position>,
}

impl AccountState {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn position(&self, coin: &str) -> Option<&Position> {
        self.positions
            .iter()
            .find(|position| position.coin.eq_ignore_ascii_case(coin))
    }
}

pub fn orders_for(orders: &[Order], coin: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.coin.eq_ignore_ascii_case(coin))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::side::Side;
    use rust_decimal_macros::dec;

    #[test]
    fn finds_position_for_coin() {
        let state = AccountState::new(vec![
            Position::new("ETH", dec!(1.5), dec!(3000)),
            Position::new("BTC", dec!(0.5), dec!(50000)),
        ]);

        let position = state.position("BTC").unwrap();
        assert_eq!(position.coin, "BTC");
        assert_eq!(position.size, dec!(0.5));
        assert_eq!(position.entry_price, dec!(50000));
    }

    #[test]
    fn missing_coin_has_no_position() {
        let state = AccountState::new(vec![Position::new("ETH", dec!(1.5), dec!(3000))]);
        assert!(state.position("BTC").is_none());
        assert!(AccountState::default().position("BTC").is_none());
    }

    #[test]
    fn filters_orders_by_coin() {
        let orders = vec![
            Order::new("BTC", Side::Buy, dec!(0.1), dec!(50000)),
            Order::new("ETH", Side::Buy, dec!(1.0), dec!(3000)),
            Order::new("BTC", Side::Sell, dec!(0.2), dec!(51000)),
        ];

        let btc = orders_for(&orders, "btc");
        assert_eq!(btc.len(), 2);
        assert!(btc.iter().all(|order| order.coin == "BTC"));
    }

    #[test]
    fn no_matching_orders_is_empty() {
        let orders = vec![Order::new("ETH", Side::Buy, dec!(1.0), dec!(3000))];
        assert!(orders_for(&orders, "BTC").is_empty());
        assert!(orders_for(&[], "BTC").is_empty());
    }
}
