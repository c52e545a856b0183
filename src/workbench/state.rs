use crate::models::{Order, OrderStatus, StatusFilter};

/// Local view of the remote order list for one admin session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbenchState {
    pub orders: Vec<Order>,
    pub filter: StatusFilter,
    pub selected_id: Option<String>,
    /// Set once the initial fetch has been attempted, whatever its outcome.
    pub mounted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Loaded(Vec<Order>),
    SetFilter(StatusFilter),
    ToggleDetail(String),
    /// The store acknowledged a status patch.
    StatusCommitted { id: String, status: OrderStatus },
    /// The store acknowledged a delete.
    Removed(String),
}

impl WorkbenchState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loaded(orders) => {
                self.orders = orders;
            }
            Action::SetFilter(filter) => {
                self.filter = filter;
            }
            Action::ToggleDetail(id) => {
                self.selected_id = match self.selected_id.take() {
                    Some(current) if current == id => None,
                    _ => Some(id),
                };
            }
            Action::StatusCommitted { id, status } => {
                if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
                    order.status = Some(status);
                }
            }
            Action::Removed(id) => {
                self.orders.retain(|o| o.id != id);
            }
        }
    }

    pub fn visible(&self) -> Vec<&Order> {
        visible(&self.orders, self.filter)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }
}

/// Orders shown under `filter`, in list order.
pub fn visible(orders: &[Order], filter: StatusFilter) -> Vec<&Order> {
    orders.iter().filter(|o| filter.matches(o.status)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: Option<OrderStatus>) -> Order {
        Order {
            id: id.to_string(),
            first_name: "Test".into(),
            last_name: "Customer".into(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            zip_code: String::new(),
            total: 10.0,
            discount: 0.0,
            order_date: "2025-01-20T10:00:00Z".into(),
            status,
            cart_items: Vec::new(),
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order("a", Some(OrderStatus::Pending)),
            order("b", Some(OrderStatus::Success)),
            order("c", None),
            order("d", Some(OrderStatus::Pending)),
            order("e", Some(OrderStatus::Dispatch)),
        ]
    }

    #[test]
    fn filter_is_stable_subset() {
        let orders = sample();
        for filter in StatusFilter::TABS {
            let ids: Vec<&str> = visible(&orders, filter).iter().map(|o| o.id.as_str()).collect();
            let expected: Vec<&str> = orders
                .iter()
                .filter(|o| filter == StatusFilter::All || filter.matches(o.status))
                .map(|o| o.id.as_str())
                .collect();
            assert_eq!(ids, expected, "filter {filter:?}");
        }

        let pending: Vec<&str> = visible(&orders, StatusFilter::Pending)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(pending, ["a", "d"]);
        assert_eq!(visible(&orders, StatusFilter::All).len(), orders.len());
    }

    #[test]
    fn unset_status_only_shows_under_all() {
        let orders = vec![order("c", None)];
        assert_eq!(visible(&orders, StatusFilter::All).len(), 1);
        for filter in &StatusFilter::TABS[1..] {
            assert!(visible(&orders, *filter).is_empty());
        }
    }

    #[test]
    fn toggle_twice_collapses() {
        let mut state = WorkbenchState::default();
        state.apply(Action::ToggleDetail("a".into()));
        assert!(state.is_expanded("a"));
        state.apply(Action::ToggleDetail("a".into()));
        assert_eq!(state.selected_id, None);
    }

    #[test]
    fn toggle_other_row_switches_selection() {
        let mut state = WorkbenchState::default();
        state.apply(Action::ToggleDetail("a".into()));
        state.apply(Action::ToggleDetail("b".into()));
        assert_eq!(state.selected_id.as_deref(), Some("b"));
        assert!(!state.is_expanded("a"));
    }

    #[test]
    fn status_commit_merges_single_field() {
        let mut state = WorkbenchState {
            orders: sample(),
            ..Default::default()
        };
        let before = state.orders.clone();

        state.apply(Action::StatusCommitted {
            id: "c".into(),
            status: OrderStatus::Dispatch,
        });

        assert_eq!(state.orders[2].status, Some(OrderStatus::Dispatch));
        let mut expected = before[2].clone();
        expected.status = Some(OrderStatus::Dispatch);
        assert_eq!(state.orders[2], expected);
        for i in [0, 1, 3, 4] {
            assert_eq!(state.orders[i], before[i]);
        }
    }

    #[test]
    fn removal_drops_only_matching_id() {
        let mut state = WorkbenchState {
            orders: sample(),
            ..Default::default()
        };
        state.apply(Action::Removed("b".into()));
        let ids: Vec<&str> = state.orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "d", "e"]);
    }

    #[test]
    fn filter_change_keeps_orders() {
        let mut state = WorkbenchState {
            orders: sample(),
            ..Default::default()
        };
        state.apply(Action::SetFilter(StatusFilter::Dispatch));
        assert_eq!(state.orders.len(), 5);
        assert_eq!(state.visible().len(), 1);
    }
}
