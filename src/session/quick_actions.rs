//! Quick-action shortcuts shown at the start of a conversation.
//!
//! A quick action pre-fills the input buffer with a canned phrase; it never
//! submits on its own. The table is static and immutable for the process
//! lifetime.

/// A predefined phrase shortcut.
#[derive(Debug, Clone)]
pub struct QuickAction {
    /// Label shown to the user.
    pub label: &'static str,
    /// Text placed in the input buffer when applied.
    pub fill: &'static str,
}

impl QuickAction {
    /// Returns true if this action matches the given filter (case-insensitive).
    pub fn matches(&self, filter: &str) -> bool {
        self.label.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Available quick actions, in display order.
pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Analisar Auto de Infração",
        fill: "Analisar Auto de Infração",
    },
    QuickAction {
        label: "Consultar Artigo CTB",
        fill: "Consultar Artigo CTB",
    },
    QuickAction {
        label: "Criar Defesa",
        fill: "Criar Defesa",
    },
    QuickAction {
        label: "Buscar Jurisprudência",
        fill: "Buscar Jurisprudência",
    },
];

/// Ordered view of all quick actions.
pub fn all() -> &'static [QuickAction] {
    QUICK_ACTIONS
}

/// Looks up a quick action by zero-based index.
pub fn get(index: usize) -> Option<&'static QuickAction> {
    QUICK_ACTIONS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_stable() {
        assert_eq!(all().len(), 4);
        assert_eq!(all()[1].label, "Consultar Artigo CTB");
        assert_eq!(all()[1].fill, "Consultar Artigo CTB");
    }

    #[test]
    fn test_get_by_index() {
        assert_eq!(get(0).unwrap().label, "Analisar Auto de Infração");
        assert!(get(4).is_none());
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let action = get(3).unwrap();
        assert!(action.matches("jurisprudência"));
        assert!(action.matches("BUSCAR"));
        assert!(!action.matches("defesa"));
    }
}
