//! Assertion macros for collections of actions
//!
//! Consumers that collect the actions they dispatch can check them by category:
//!
//! ```
//! use threatmodel_actions::{assert_category_dispatched, count_category};
//! use threatmodel_actions::{ActionType, ThreatModelAction};
//!
//! let actions: Vec<ThreatModelAction> =
//!     vec![ActionType::DiagramSelected.into(), ActionType::Save.into()];
//!
//! assert_category_dispatched!(actions, "diagram");
//! assert_eq!(count_category!(actions, "threatmodel"), 1);
//! ```

/// Assert that an action of a specific category was dispatched.
///
/// Requires the action type to implement [`ActionCategory`](crate::ActionCategory).
#[macro_export]
macro_rules! assert_category_dispatched {
    ($actions:expr, $category:expr) => {
        assert!(
            $actions.iter().any(|a| {
                use $crate::ActionCategory;
                a.category() == Some($category)
            }),
            "Expected action with category `{}` to be dispatched, but got: {:?}",
            $category,
            $actions
        );
    };
}

/// Assert that NO action of a specific category was dispatched.
#[macro_export]
macro_rules! assert_category_not_dispatched {
    ($actions:expr, $category:expr) => {
        assert!(
            !$actions.iter().any(|a| {
                use $crate::ActionCategory;
                a.category() == Some($category)
            }),
            "Expected NO action with category `{}` to be dispatched, but got: {:?}",
            $category,
            &$actions
        );
    };
}

/// Count how many actions belong to a specific category.
#[macro_export]
macro_rules! count_category {
    ($actions:expr, $category:expr) => {{
        use $crate::ActionCategory;
        $actions
            .iter()
            .filter(|a| a.category() == Some($category))
            .count()
    }};
}
