//! ActorEntity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Order`] to be managed by the generic [`crate::framework::ResourceActor`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderNote};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.number, params.billing_email))
    }

    /// Handles metadata and note actions.
    ///
    /// None of them can fail once the order resolved; an unknown order is
    /// answered by the actor before this is reached.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<OrderActionResult, Self::Error> {
        let result = match action {
            OrderAction::GetMeta(key) => OrderActionResult::GetMeta(self.meta.get(&key).cloned()),
            OrderAction::UpdateMeta { key, value } => {
                OrderActionResult::UpdateMeta(self.meta.insert(key, value))
            }
            OrderAction::DeleteMeta(key) => OrderActionResult::DeleteMeta(self.meta.remove(&key)),
            OrderAction::AddNote(content) => {
                self.notes.push(OrderNote {
                    content,
                    added_at: Utc::now(),
                });
                OrderActionResult::AddNote(self.notes.len())
            }
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order::new(OrderId(7), None, Some("ana@example.com".into()))
    }

    #[tokio::test]
    async fn meta_update_returns_replaced_value() {
        let mut order = order();
        let first = order
            .handle_action(
                OrderAction::UpdateMeta {
                    key: "k".into(),
                    value: "a".into(),
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(first, OrderActionResult::UpdateMeta(None));

        let second = order
            .handle_action(
                OrderAction::UpdateMeta {
                    key: "k".into(),
                    value: "b".into(),
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(second, OrderActionResult::UpdateMeta(Some("a".into())));
        assert_eq!(order.meta("k"), Some("b"));
    }

    #[tokio::test]
    async fn delete_meta_of_missing_key_is_noop() {
        let mut order = order();
        let result = order
            .handle_action(OrderAction::DeleteMeta("k".into()), &())
            .await
            .unwrap();
        assert_eq!(result, OrderActionResult::DeleteMeta(None));
        assert!(order.meta.is_empty());
    }

    #[tokio::test]
    async fn notes_are_appended_in_order() {
        let mut order = order();
        order
            .handle_action(OrderAction::AddNote("one".into()), &())
            .await
            .unwrap();
        let count = order
            .handle_action(OrderAction::AddNote("two".into()), &())
            .await
            .unwrap();
        assert_eq!(count, OrderActionResult::AddNote(2));
        let contents: Vec<_> = order.notes.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, ["one", "two"]);
    }

    #[test]
    fn number_defaults_to_id() {
        assert_eq!(order().number, "7");
        let numbered = Order::new(OrderId(7), Some("A-100".into()), None);
        assert_eq!(numbered.number, "A-100");
    }

    #[test]
    fn blank_billing_email_is_not_a_recipient() {
        let blank = Order::new(OrderId(1), None, Some("   ".into()));
        assert_eq!(blank.recipient(), None);
        assert_eq!(order().recipient(), Some("ana@example.com"));
    }
}
