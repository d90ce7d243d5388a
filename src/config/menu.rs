//! Setup menu classification and back-references.
//!
//! Entries carry a [`MenuTag`] telling the setup menu which screen and
//! group they belong to. Menu nodes live in a [`MenuArena`]; an entry refers
//! to its node by [`MenuNodeId`] rather than by reference.

use serde::Serialize;

use super::error::ConfigError;
use super::registry::Registry;

/// Setup menu screen an entry is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupScreen {
    /// Not shown in the setup menu
    None,
    /// Key bindings
    Keys,
    /// Weapon preferences
    Weapons,
    /// Status bar and HUD
    Status,
    /// Automap
    Automap,
    /// Enemy behavior
    Enemies,
    /// Messages
    Messages,
    /// Chat macros
    Chat,
    /// General options
    General,
    /// Compatibility options
    Compat,
}

/// Screen and group an entry is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MenuTag {
    /// Setup screen
    pub screen: SetupScreen,
    /// Group within the screen
    pub group: u16,
}

impl MenuTag {
    /// Tag of entries not shown in the setup menu.
    pub const NONE: Self = Self::new(SetupScreen::None, 0);

    /// Creates a tag.
    #[must_use]
    pub const fn new(screen: SetupScreen, group: u16) -> Self {
        Self { screen, group }
    }
}

/// Handle to a node in a [`MenuArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MenuNodeId(usize);

impl MenuNodeId {
    /// Position of the node in its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One item of a setup screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    /// Text shown for the item
    pub label: String,
    /// Name of the entry edited by this item, if any
    pub entry: Option<&'static str>,
}

/// Owner of all menu nodes.
#[derive(Debug, Default)]
pub struct MenuArena {
    nodes: Vec<MenuNode>,
}

impl MenuArena {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a node and returns its handle.
    pub fn add(&mut self, label: impl Into<String>, entry: Option<&'static str>) -> MenuNodeId {
        self.nodes.push(MenuNode {
            label: label.into(),
            entry,
        });
        MenuNodeId(self.nodes.len() - 1)
    }

    /// Node behind `id`.
    #[must_use]
    pub fn get(&self, id: MenuNodeId) -> Option<&MenuNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds one node per entry on `screen`, in registry order, and links each
    /// entry back to its node. Returns the new handles.
    ///
    /// # Errors
    ///
    /// Propagates [`Registry::link_menu_node`] failures.
    pub fn populate(
        &mut self,
        registry: &mut Registry,
        screen: SetupScreen,
    ) -> Result<Vec<MenuNodeId>, ConfigError> {
        let names: Vec<&'static str> = registry.for_screen(screen).map(|e| e.name()).collect();

        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            let id = self.add(name, Some(name));
            registry.link_menu_node(name, id)?;
            ids.push(id);
        }

        tracing::debug!("Populated {screen:?} setup screen with {} items", ids.len());
        Ok(ids)
    }
}
