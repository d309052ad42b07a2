//! Static route table mapping URL paths to views.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    ShowsList,
    CreateShow,
    /// Play a generated card.
    BingoCard,
    /// Edit form for an existing show.
    ShowDetail,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub view: View,
    /// Whether route parameters are handed to the view as props.
    pub props: bool,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        view: View::ShowsList,
        props: false,
    },
    RouteDef {
        path: "/show/:id",
        view: View::BingoCard,
        props: true,
    },
    RouteDef {
        path: "/show/:id/edit",
        view: View::ShowDetail,
        props: true,
    },
    RouteDef {
        path: "/create",
        view: View::CreateShow,
        props: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteProps {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub view: View,
    pub props: Option<RouteProps>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub path: String,
    /// Original path when the first navigation was normalized.
    pub redirected_from: Option<String>,
    pub route: RouteMatch,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route for {0}")]
    NotFound(String),
    #[error("invalid {param} parameter: {value:?}")]
    InvalidParam { param: &'static str, value: String },
    #[error("{0:?} needs an id")]
    MissingParam(View),
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Resolve a path against the route table.
pub fn resolve(path: &str) -> Result<RouteMatch, RouteError> {
    let parts: Vec<&str> = segments(path).collect();

    for def in ROUTES {
        let pattern: Vec<&str> = segments(def.path).collect();
        if pattern.len() != parts.len() {
            continue;
        }

        let mut id = None;
        let mut matched = true;
        for (want, got) in pattern.iter().zip(&parts) {
            if let Some(param) = want.strip_prefix(':') {
                id = Some((param, *got));
            } else if want != got {
                matched = false;
                break;
            }
        }
        if !matched {
            continue;
        }

        let props = match (def.props, id) {
            (true, Some((_, raw))) => {
                let id = raw.parse::<i64>().map_err(|_| RouteError::InvalidParam {
                    param: "id",
                    value: raw.to_string(),
                })?;
                Some(RouteProps { id })
            }
            _ => None,
        };
        return Ok(RouteMatch {
            view: def.view,
            props,
        });
    }

    Err(RouteError::NotFound(path.to_string()))
}

/// Build the path that leads to `view`.
pub fn path_for(view: View, id: Option<i64>) -> Result<String, RouteError> {
    let def = ROUTES
        .iter()
        .find(|def| def.view == view)
        .ok_or(RouteError::MissingParam(view))?;
    if !def.path.contains(":id") {
        return Ok(def.path.to_string());
    }
    let id = id.ok_or(RouteError::MissingParam(view))?;
    Ok(def.path.replace(":id", &id.to_string()))
}

/// Canonical form of a hash-history location: the fragment after `#` if
/// any, without `index.html`, query string, empty segments or trailing slash.
pub fn normalize_path(raw: &str) -> String {
    let raw = raw.trim();
    let location = match raw.split_once('#') {
        Some((_, fragment)) => fragment,
        None => raw,
    };
    let location = location.split('?').next().unwrap_or_default();

    let parts: Vec<&str> = segments(location)
        .filter(|s| !s.eq_ignore_ascii_case("index.html"))
        .collect();
    format!("/{}", parts.join("/"))
}

/// Resolves navigations, normalizing the very first one.
#[derive(Debug, Default)]
pub struct Router {
    navigated: bool,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, raw: &str) -> Result<Navigation, RouteError> {
        let mut redirected_from = None;
        let path = if self.navigated {
            raw.to_string()
        } else {
            self.navigated = true;
            let normalized = normalize_path(raw);
            if normalized != raw {
                tracing::debug!(from = raw, to = %normalized, "Normalized initial path");
                redirected_from = Some(raw.to_string());
            }
            normalized
        };

        let route = resolve(&path)?;
        Ok(Navigation {
            path,
            redirected_from,
            route,
        })
    }
}
