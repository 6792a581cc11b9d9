//! Router-backed navigation

use fixitnow_insights::{Navigator, Route};
use leptos_router::NavigateOptions;

/// Adapts the closure from `use_navigate()` to [`Navigator`]
#[derive(Clone)]
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, route: Route) {
        (self.0)(route.path(), NavigateOptions::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_navigates_to_route_path() {
        let visited = RefCell::new(Vec::new());
        let navigator = RouterNavigator(|path: &str, _: NavigateOptions| {
            visited.borrow_mut().push(path.to_string());
        });

        navigator.navigate(Route::AdminLogin);
        navigator.navigate(Route::AdminDashboard);

        assert_eq!(*visited.borrow(), vec!["/admin-login", "/admin/dashboard"]);
    }
}
