// ============================================================================
// ROUTER - declarative route table + navigation guard
// ============================================================================
// The guard is a pure decision function over the route table and the live
// session; whatever renders views applies the decision.
// ============================================================================

use crate::services::session::SessionStore;
use crate::utils::constants::LOGIN_PATH;

const CHANGE_PASSWORD_PATH: &str = "/account/change-password";
const ROOT_PATH: &str = "/";

const ALL_ROLES: &[&str] = &["admin", "manager", "sales"];
const MANAGER_UP: &[&str] = &["admin", "manager"];
const ADMIN_ONLY: &[&str] = &["admin"];

/// Static description of one route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMeta {
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub public: bool,
    /// Empty list means any authenticated role
    pub roles: &'static [&'static str],
}

pub const ROUTES: &[RouteMeta] = &[
    RouteMeta {
        path: LOGIN_PATH,
        name: "Login",
        title: "登录",
        public: true,
        roles: &[],
    },
    RouteMeta {
        path: ROOT_PATH,
        name: "Dashboard",
        title: "工作台",
        public: false,
        roles: ALL_ROLES,
    },
    RouteMeta {
        path: "/leads",
        name: "Leads",
        title: "客户管理",
        public: false,
        roles: ALL_ROLES,
    },
    RouteMeta {
        path: "/public-pool",
        name: "PublicPool",
        title: "公海池",
        public: false,
        roles: ALL_ROLES,
    },
    RouteMeta {
        path: "/public-pool/audit",
        name: "PublicPoolAudit",
        title: "公海流转审计",
        public: false,
        roles: MANAGER_UP,
    },
    RouteMeta {
        path: "/reports",
        name: "Reports",
        title: "数据报表",
        public: false,
        roles: ALL_ROLES,
    },
    RouteMeta {
        path: "/settings/recycle-notifications",
        name: "RecycleNotifications",
        title: "回收预警通知",
        public: false,
        roles: MANAGER_UP,
    },
    RouteMeta {
        path: "/settings/org",
        name: "SettingsOrg",
        title: "组织架构管理",
        public: false,
        roles: ADMIN_ONLY,
    },
    RouteMeta {
        path: "/settings/roles",
        name: "SettingsRoles",
        title: "账号与权限",
        public: false,
        roles: ADMIN_ONLY,
    },
    RouteMeta {
        path: "/settings/fields",
        name: "SettingsFields",
        title: "字段自定义",
        public: false,
        roles: ADMIN_ONLY,
    },
    RouteMeta {
        path: "/settings/dict",
        name: "SettingsDict",
        title: "字典管理",
        public: false,
        roles: ADMIN_ONLY,
    },
    RouteMeta {
        path: "/settings/rules",
        name: "SettingsRules",
        title: "自动回收规则",
        public: false,
        roles: ADMIN_ONLY,
    },
    RouteMeta {
        path: "/settings/platform",
        name: "SettingsPlatform",
        title: "平台设置",
        public: false,
        roles: ADMIN_ONLY,
    },
    RouteMeta {
        path: CHANGE_PASSWORD_PATH,
        name: "AccountChangePassword",
        title: "修改密码",
        public: false,
        roles: ALL_ROLES,
    },
];

/// Legacy paths kept alive as redirects
pub const ROUTE_ALIASES: &[(&str, &str)] = &[(
    "/recycle-notifications",
    "/settings/recycle-notifications",
)];

/// Paths outside the table behave like a bare route: private, no role list
const UNKNOWN_ROUTE: RouteMeta = RouteMeta {
    path: "",
    name: "Unknown",
    title: "",
    public: false,
    roles: &[],
};

/// Follow aliases and look a path up in the route table
pub fn resolve(path: &str) -> Option<&'static RouteMeta> {
    let target = ROUTE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == path)
        .map(|(_, real)| *real)
        .unwrap_or(path);
    ROUTES.iter().find(|route| route.path == target)
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    Allow,
    RedirectTo(&'static str),
}

/// Decide a navigation to `route`, consulting the live session.
///
/// Checks run in fixed order: public routes (login bounces authenticated
/// users to the root), then login, then the forced password change, then
/// the role allow-list.
pub fn decide(route: &RouteMeta, session: &SessionStore) -> RouteDecision {
    if route.public {
        if route.path == LOGIN_PATH && session.is_logged_in() {
            return RouteDecision::RedirectTo(ROOT_PATH);
        }
        return RouteDecision::Allow;
    }

    if !session.is_logged_in() {
        return RouteDecision::RedirectTo(LOGIN_PATH);
    }

    if session.must_change_password() && route.path != CHANGE_PASSWORD_PATH {
        return RouteDecision::RedirectTo(CHANGE_PASSWORD_PATH);
    }

    if !route.roles.is_empty() {
        let role = session.current_role();
        if !route.roles.contains(&role.as_str()) {
            return RouteDecision::RedirectTo(ROOT_PATH);
        }
    }

    RouteDecision::Allow
}

/// Resolve + decide in one step, for direct path navigation
pub fn guard(path: &str, session: &SessionStore) -> RouteDecision {
    match resolve(path) {
        Some(route) => decide(route, session),
        None => decide(&UNKNOWN_ROUTE, session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::LoginData;
    use crate::utils::storage::MemoryStorage;

    fn session() -> SessionStore {
        SessionStore::new(MemoryStorage::shared())
    }

    fn login_as(store: &SessionStore, role: &str, must_change_password: bool) {
        store.save_session(&LoginData {
            access_token: "acc".to_string(),
            refresh_token: "ref".to_string(),
            token_type: "Bearer".to_string(),
            staff_id: "s-01".to_string(),
            name: "张三".to_string(),
            role: role.to_string(),
            phone: "13800000000".to_string(),
            must_change_password,
        });
    }

    #[test]
    fn unauthenticated_user_is_sent_to_login() {
        let store = session();
        assert_eq!(guard("/leads", &store), RouteDecision::RedirectTo("/login"));
        assert_eq!(guard("/", &store), RouteDecision::RedirectTo("/login"));
    }

    #[test]
    fn login_is_public_but_bounces_authenticated_users() {
        let store = session();
        assert_eq!(guard("/login", &store), RouteDecision::Allow);

        login_as(&store, "sales", false);
        assert_eq!(guard("/login", &store), RouteDecision::RedirectTo("/"));
    }

    #[test]
    fn pending_password_change_hijacks_every_private_route() {
        let store = session();
        login_as(&store, "sales", true);
        assert_eq!(
            guard("/reports", &store),
            RouteDecision::RedirectTo("/account/change-password")
        );
        assert_eq!(guard("/account/change-password", &store), RouteDecision::Allow);
    }

    #[test]
    fn role_allow_list_redirects_to_root() {
        let store = session();
        login_as(&store, "sales", false);
        assert_eq!(guard("/settings/org", &store), RouteDecision::RedirectTo("/"));
        assert_eq!(guard("/public-pool/audit", &store), RouteDecision::RedirectTo("/"));
        assert_eq!(guard("/leads", &store), RouteDecision::Allow);

        let admin = session();
        login_as(&admin, "admin", false);
        assert_eq!(guard("/settings/org", &admin), RouteDecision::Allow);
    }

    #[test]
    fn guard_reads_the_live_session_each_time() {
        let store = session();
        login_as(&store, "sales", false);
        assert_eq!(guard("/leads", &store), RouteDecision::Allow);
        store.clear();
        assert_eq!(guard("/leads", &store), RouteDecision::RedirectTo("/login"));
    }

    #[test]
    fn legacy_recycle_path_follows_the_alias() {
        let route = resolve("/recycle-notifications").unwrap();
        assert_eq!(route.path, "/settings/recycle-notifications");
        assert_eq!(route.roles, &["admin", "manager"]);
    }

    #[test]
    fn unknown_paths_require_login_but_no_role() {
        let store = session();
        assert_eq!(guard("/nope", &store), RouteDecision::RedirectTo("/login"));
        login_as(&store, "sales", false);
        assert_eq!(guard("/nope", &store), RouteDecision::Allow);
    }

    #[test]
    fn route_table_titles_and_flags() {
        let login = resolve("/login").unwrap();
        assert!(login.public);
        assert_eq!(login.title, "登录");

        let dict = resolve("/settings/dict").unwrap();
        assert_eq!(dict.roles, &["admin"]);
        assert!(!dict.public);
    }
}
