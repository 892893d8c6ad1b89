//! Role → navigation resolution.
//!
//! Each role owns a fixed, ordered entry list. Order is part of the
//! contract: consumers apply "first match wins" over [`NavEntry::is_active`]
//! results, so the resolver must return the identical sequence on every
//! call.

use crate::identity::Role;

/// One navigation menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Target route.
    pub path: &'static str,
    /// Display text.
    pub label: &'static str,
    /// When true the entry is active only on an exact path match.
    pub exact: bool,
}

impl NavEntry {
    /// Entry-level active check: exact entries require path equality, prefix
    /// entries match on segment boundaries only (`/pagos` is active for
    /// `/pagos/historial` but not for `/pagos-admin`).
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.exact {
            return current_path == self.path;
        }
        current_path == self.path
            || current_path
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

const ADMINISTRATOR_NAV: &[NavEntry] = &[
    NavEntry { path: "/admin", label: "Panel", exact: true },
    NavEntry { path: "/admin/usuarios", label: "Usuarios", exact: true },
    NavEntry { path: "/admin/pagos", label: "Pagos", exact: false },
    NavEntry { path: "/admin/reportes", label: "Reportes", exact: false },
];

const CO_OWNER_NAV: &[NavEntry] = &[
    NavEntry { path: "/dashboard", label: "Inicio", exact: true },
    NavEntry { path: "/pagos", label: "Mis pagos", exact: false },
    NavEntry { path: "/reservas", label: "Reservas", exact: false },
    NavEntry { path: "/perfil", label: "Perfil", exact: true },
];

/// Ordered navigation entries the given role may see.
///
/// Total over [`Role`]; the match is exhaustive, so adding a role is a
/// compile-time-enforced update site.
#[must_use]
pub fn resolve(role: Role) -> &'static [NavEntry] {
    match role {
        Role::Administrator => ADMINISTRATOR_NAV,
        Role::CoOwner => CO_OWNER_NAV,
    }
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;
