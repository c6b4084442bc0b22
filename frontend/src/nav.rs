//! 侧边栏导航模块 - 领域模型
//!
//! 静态菜单树 + 可见性过滤。过滤分两步：
//! 1. 权限过滤：提权角色整树放行；否则去掉带权限标记且档案
//!    不包含该权限的顶层叶子项（分组整体不做权限检查，
//!    既有行为原样保留）。
//! 2. 标题修剪：一趟顺序扫描，只保留紧跟着非标题节点的分组标题，
//!    保证结果里没有连续标题、也没有悬空的尾部标题。

use crate::components::icons::IconKind;
use crate::web::route::AppRoute;
use lwsc_admin_shared::AdminProfile;

/// 叶子菜单项
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub route: AppRoute,
    /// 需要的权限标记；None 表示任何已登录管理员可见
    pub permission: Option<&'static str>,
    pub icon: Option<IconKind>,
}

impl NavItem {
    const fn new(name: &'static str, route: AppRoute) -> Self {
        Self {
            name,
            route,
            permission: None,
            icon: None,
        }
    }

    const fn permission(mut self, permission: &'static str) -> Self {
        self.permission = Some(permission);
        self
    }

    const fn icon(mut self, icon: IconKind) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// 嵌套分组
#[derive(Debug, Clone, PartialEq)]
pub struct NavGroup {
    pub name: &'static str,
    pub icon: Option<IconKind>,
    pub children: Vec<NavItem>,
}

/// 菜单树节点
#[derive(Debug, Clone, PartialEq)]
pub enum NavNode {
    /// 分组标题（不可交互，只作为下方条目的小标题）
    Title(&'static str),
    Item(NavItem),
    Group(NavGroup),
}

impl NavNode {
    pub fn is_title(&self) -> bool {
        matches!(self, NavNode::Title(_))
    }
}

/// 静态菜单树
pub fn menu() -> Vec<NavNode> {
    vec![
        NavNode::Title("Dashboard"),
        NavNode::Item(
            NavItem::new("Dashboard", AppRoute::Dashboard)
                .permission("dashboard")
                .icon(IconKind::Speedometer),
        ),
        NavNode::Title("Management"),
        NavNode::Item(
            NavItem::new("User Management", AppRoute::Users)
                .permission("users")
                .icon(IconKind::User),
        ),
        NavNode::Item(
            NavItem::new("Pain Locations", AppRoute::PainLocations)
                .permission("pain-locations")
                .icon(IconKind::MapPin),
        ),
        NavNode::Item(
            NavItem::new("Facilities", AppRoute::Facilities)
                .permission("facilities")
                .icon(IconKind::Building),
        ),
        NavNode::Group(NavGroup {
            name: "Resources",
            icon: Some(IconKind::Book),
            children: vec![NavItem::new("Articles", AppRoute::Articles)],
        }),
        NavNode::Group(NavGroup {
            name: "Rewards",
            icon: Some(IconKind::Gift),
            children: vec![
                NavItem::new("Achievements", AppRoute::Achievements).icon(IconKind::Star),
                NavItem::new("Badges", AppRoute::Badges).icon(IconKind::Badge),
            ],
        }),
        NavNode::Group(NavGroup {
            name: "Logs & Reports",
            icon: Some(IconKind::List),
            children: vec![
                NavItem::new("Pain Logs", AppRoute::PainLogs),
                NavItem::new("Mood Logs", AppRoute::MoodLogs),
                NavItem::new("Hydration Logs", AppRoute::HydrationLogs),
                NavItem::new("Medication Logs", AppRoute::MedicationLogs),
            ],
        }),
    ]
}

/// 从菜单树推导当前可见的侧边栏菜单
///
/// 没有档案时整树返回（加载期兜底，与既有行为一致）。
pub fn filter_menu(nodes: Vec<NavNode>, profile: Option<&AdminProfile>) -> Vec<NavNode> {
    let Some(profile) = profile else {
        return nodes;
    };

    let filtered = if profile.is_elevated() {
        nodes
    } else {
        permission_pass(nodes, profile)
    };

    prune_titles(filtered)
}

/// 第一步：去掉权限不满足的顶层叶子项
fn permission_pass(nodes: Vec<NavNode>, profile: &AdminProfile) -> Vec<NavNode> {
    nodes
        .into_iter()
        .filter(|node| match node {
            NavNode::Item(item) => match item.permission {
                Some(permission) => profile.permissions.iter().any(|p| p == permission),
                None => true,
            },
            // 标题交给第二步处理；分组不做权限检查
            NavNode::Title(_) | NavNode::Group(_) => true,
        })
        .collect()
}

/// 第二步：一趟扫描修剪标题
///
/// 标题只在紧跟的下一个节点存在且不是标题时保留；
/// 非标题节点无条件保留，相对顺序不变。
fn prune_titles(nodes: Vec<NavNode>) -> Vec<NavNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        if node.is_title() {
            match nodes.get(i + 1) {
                Some(next) if !next.is_title() => out.push(node.clone()),
                _ => {}
            }
        } else {
            out.push(node.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests;
