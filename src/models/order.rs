//! Payment order records

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CodeText;
use crate::fixtures::{Faker, format_date_time, round_to};

const PAYMENT_TYPES: &[CodeText] = &[
    CodeText::new(0, "微信支付"),
    CodeText::new(1, "支付宝"),
    CodeText::new(2, "银行卡"),
];

const INVOICE_STATUSES: &[CodeText] = &[CodeText::new(0, "未开票"), CodeText::new(1, "已开票")];

const PAY_STATUSES: &[CodeText] = &[
    CodeText::new(0, "待支付"),
    CodeText::new(1, "已支付"),
    CodeText::new(2, "已退款"),
];

/// Order row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub hospital_store_name: String,
    pub order_no: String,
    pub item_name: String,
    pub payment_type: u8,
    pub payment_type_desc: String,
    pub invoice_status: u8,
    pub invoice_status_desc: String,
    pub order_amount: f64,
    /// `order_amount - discount_amount`, never negative
    pub real_amount: f64,
    pub discount_amount: f64,
    /// `YYYY-MM-DD HH:MM:SS`
    pub pay_date: String,
    pub pay_status: u8,
    pub pay_status_desc: String,
}

impl Order {
    pub fn fake(f: &mut Faker) -> Self {
        let payment_type = *f.pick(PAYMENT_TYPES);
        let invoice_status = *f.pick(INVOICE_STATUSES);
        let pay_status = *f.pick(PAY_STATUSES);
        let order_amount = f.float(100.0, 5000.0, 2);
        let discount_amount = f.float(0.0, order_amount * 0.3, 2);
        let real_amount = round_to((order_amount - discount_amount).max(0.0), 2);
        let pay_date = f.recent(180);
        Self {
            hospital_store_name: f.company_name(),
            order_no: f.alphanumeric_upper(16),
            item_name: f.product_name(),
            payment_type: payment_type.code,
            payment_type_desc: payment_type.text.to_string(),
            invoice_status: invoice_status.code,
            invoice_status_desc: invoice_status.text.to_string(),
            order_amount,
            real_amount,
            discount_amount,
            pay_date: format_date_time(pay_date),
            pay_status: pay_status.code,
            pay_status_desc: pay_status.text.to_string(),
        }
    }
}

/// Billed line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_name: String,
    pub item_amount: f64,
}

/// Order with its billed lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

impl OrderDetail {
    pub fn fake(f: &mut Faker) -> Self {
        let order = Order::fake(f);
        let count = f.count(1, 5);
        let items = f.multiple(count, |f| OrderItem {
            item_name: f.product_name(),
            item_amount: f.float(20.0, 300.0, 2),
        });
        Self { order, items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FixtureSource, SeededSource};

    #[test]
    fn test_order_amounts_are_consistent() {
        let mut f = SeededSource::new(9).faker();
        for _ in 0..100 {
            let order = Order::fake(&mut f);
            assert!((100.0..=5000.0).contains(&order.order_amount));
            assert!(order.discount_amount >= 0.0);
            assert!(order.discount_amount <= order.order_amount * 0.3 + 0.01);
            assert!(order.real_amount >= 0.0);
            assert!(
                (order.real_amount - (order.order_amount - order.discount_amount)).abs() < 0.011
            );
            assert_eq!(order.order_no.len(), 16);
        }
    }

    #[test]
    fn test_code_and_text_agree() {
        let mut f = SeededSource::new(10).faker();
        for _ in 0..30 {
            let order = Order::fake(&mut f);
            let expected = PAY_STATUSES
                .iter()
                .find(|status| status.code == order.pay_status)
                .unwrap();
            assert_eq!(order.pay_status_desc, expected.text);
        }
    }

    #[test]
    fn test_detail_flattens_order_fields() {
        let mut f = SeededSource::new(11).faker();
        let detail = OrderDetail::fake(&mut f);
        assert!((1..=5).contains(&detail.items.len()));

        let value = serde_json::to_value(&detail).unwrap();
        assert!(value.get("orderNo").is_some());
        assert!(value.get("order").is_none());
        assert!(value["items"][0].get("itemAmount").is_some());
    }
}
