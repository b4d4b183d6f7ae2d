//! Hash Routing
//!
//! `#/` lists restaurants, `#/restaurant/<id>/menu[?branch=<id>]` and
//! `#/branch/<id>/menu` open catalog views, `#/diagnostics` shows the log.

use leptos::prelude::*;
use menu_catalog::NavParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Catalog(NavParams),
    Diagnostics,
    NotFound,
}

impl Route {
    pub fn parse(hash: &str) -> Self {
        let hash = hash.trim_start_matches('#');
        let (path, query) = match hash.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (hash, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["diagnostics"] => Route::Diagnostics,
            ["restaurant", id, "menu"] => match id.parse::<u32>() {
                Ok(id) => {
                    let picked = query.and_then(|q| query_param(q, "branch")).and_then(|v| v.parse().ok());
                    Route::Catalog(NavParams::restaurant(id).with_selected_branch(picked))
                }
                Err(_) => Route::NotFound,
            },
            ["branch", id, "menu"] => match id.parse::<u32>() {
                Ok(id) => Route::Catalog(NavParams::branch(id)),
                Err(_) => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "#/".to_string(),
            Route::Diagnostics => "#/diagnostics".to_string(),
            Route::Catalog(params) => match (params.branch_id, params.restaurant_id) {
                (Some(branch_id), _) => format!("#/branch/{}/menu", branch_id),
                (None, Some(restaurant_id)) => match params.selected_branch_id {
                    Some(branch_id) => format!("#/restaurant/{}/menu?branch={}", restaurant_id, branch_id),
                    None => format!("#/restaurant/{}/menu", restaurant_id),
                },
                (None, None) => "#/".to_string(),
            },
        }
    }
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&route.href()) {
            log::warn!("[ROUTE] navigation failed: {:?}", e);
        }
    }
}

/// Current route, updated on every `hashchange`
///
/// Called once from the root component; the listener lives as long as the page.
pub fn use_route() -> ReadSignal<Route> {
    let (route, set_route) = signal(Route::parse(&current_hash()));
    let _listener = window_event_listener(leptos::ev::hashchange, move |_| {
        let next = Route::parse(&current_hash());
        log::debug!("[ROUTE] {:?}", next);
        set_route.set(next);
    });
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/branch/4/menu"), Route::Catalog(NavParams::branch(4)));
        assert_eq!(Route::parse("#/restaurant/2/menu"), Route::Catalog(NavParams::restaurant(2)));
        assert_eq!(
            Route::parse("#/restaurant/2/menu?branch=3"),
            Route::Catalog(NavParams::restaurant(2).with_selected_branch(Some(3)))
        );
        assert_eq!(Route::parse("#/branch/x/menu"), Route::NotFound);
        assert_eq!(Route::parse("#/login"), Route::NotFound);
        assert_eq!(Route::parse("#/diagnostics"), Route::Diagnostics);
    }

    #[test]
    fn test_href_round_trips() {
        for hash in ["#/", "#/diagnostics", "#/branch/4/menu", "#/restaurant/2/menu", "#/restaurant/2/menu?branch=3"] {
            assert_eq!(Route::parse(hash).href(), hash);
        }
    }
}
