use serde::Serialize;

use crate::models::pack::PackAllocation;
use crate::services::calculator::PackCalculator;

/// One requested quantity and the packs that ship it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Order {
    #[serde(rename = "Items ordered")]
    pub items: u64,
    #[serde(rename = "Correct number of Packs")]
    pub packs: Vec<PackAllocation>,
}

impl Order {
    pub fn new(items: u64, calculator: &PackCalculator) -> Self {
        Self {
            items,
            packs: calculator.calculate(items),
        }
    }

    /// Items actually shipped; never less than `items`.
    pub fn total_items(&self) -> u64 {
        self.packs.iter().map(PackAllocation::items).sum()
    }
}

/// Body of a successful `/order` response.
///
/// A single submitted quantity answers with `{"Order": {...}}`, a batch
/// with `{"Orders": [...]}` in submission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum OrderResponse {
    Order(Order),
    Orders(Vec<Order>),
}

impl OrderResponse {
    /// Builds the response for already validated quantities.
    pub fn from_quantities(quantities: &[u64], calculator: &PackCalculator) -> Self {
        match quantities {
            [single] => OrderResponse::Order(Order::new(*single, calculator)),
            many => OrderResponse::Orders(
                many.iter()
                    .map(|&items| Order::new(items, calculator))
                    .collect(),
            ),
        }
    }

    pub fn orders(&self) -> &[Order] {
        match self {
            OrderResponse::Order(order) => std::slice::from_ref(order),
            OrderResponse::Orders(orders) => orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_order_shape() {
        let response = OrderResponse::from_quantities(&[1], &PackCalculator::default());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "Order": {
                    "Items ordered": 1,
                    "Correct number of Packs": [{ "Number of Packs": 1, "Pack Size": 250 }]
                }
            })
        );
    }

    #[test]
    fn test_batch_keeps_submission_order() {
        let response = OrderResponse::from_quantities(&[251, 1, 12001], &PackCalculator::default());
        let items: Vec<u64> = response.orders().iter().map(|o| o.items).collect();
        assert_eq!(items, vec![251, 1, 12001]);

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("Order").is_none());
        assert_eq!(value["Orders"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["Orders"][0]["Correct number of Packs"][0]["Pack Size"], 500);
    }

    #[test]
    fn test_total_items_covers_request() {
        let order = Order::new(12001, &PackCalculator::default());
        assert_eq!(order.total_items(), 12250);
    }
}
