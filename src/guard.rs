//! Route access rules for signed in areas of the storefront.
//!
//! Who the viewer is comes from the session layer; here it is reduced to a
//! role read from the `role` cookie.

use crate::{config::SiteConfig, route_path::RoutePath};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Viewer {
    #[default]
    Anonymous,
    User,
    Admin,
}

impl Viewer {
    pub fn from_role(role: &str) -> Self {
        match role.trim() {
            "admin" => Self::Admin,
            "user" => Self::User,
            _ => Self::Anonymous,
        }
    }

    /// Value of a `Cookie` request header.
    pub fn from_cookie_header(header: &str) -> Self {
        header
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| name.trim() == "role")
            .map(|(_, value)| Self::from_role(value))
            .unwrap_or_default()
    }

    pub fn is_signed_in(self) -> bool {
        !matches!(self, Self::Anonymous)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// Send to login, coming back to `redirect` afterwards.
    Login { redirect: String },
    Unauthorized,
}

impl Access {
    /// Where to send the viewer instead, if anywhere.
    pub fn location(&self, config: &SiteConfig) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::Login { redirect } => Some(format!(
                "{}?redirect={}",
                config.login_path,
                utf8_percent_encode(redirect, NON_ALPHANUMERIC)
            )),
            Self::Unauthorized => Some(config.unauthorized_path.clone()),
        }
    }
}

pub fn check(config: &SiteConfig, path: &str, viewer: Viewer) -> Access {
    let route = RoutePath::new(path);
    let admin = config.admin.iter().any(|prefix| covers(prefix, &route));
    let protected = admin || config.protected.iter().any(|prefix| covers(prefix, &route));

    if !protected {
        Access::Allow
    } else if !viewer.is_signed_in() {
        Access::Login {
            redirect: route.to_string_with_leading_slash(),
        }
    } else if admin && viewer != Viewer::Admin {
        Access::Unauthorized
    } else {
        Access::Allow
    }
}

/// Whole segments only: `/my-orders` covers `/my-orders/7` but not `/my-ordersx`.
fn covers(prefix: &str, route: &RoutePath) -> bool {
    let prefix = RoutePath::new(prefix);
    !prefix.is_root()
        && prefix.len() <= route.len()
        && prefix.iter_segments().zip(route.iter_segments()).all(|(a, b)| a == b)
}
