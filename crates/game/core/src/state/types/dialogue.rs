use super::NpcId;

/// Error returned when a dialogue script is constructed without lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("dialogue script must contain at least one line")]
pub struct EmptyScript;

/// Ordered, non-empty, immutable sequence of lines an NPC can speak.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueScript(Vec<String>);

impl DialogueScript {
    pub fn new(lines: Vec<String>) -> Result<Self, EmptyScript> {
        if lines.is_empty() {
            return Err(EmptyScript);
        }
        Ok(Self(lines))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// True when `index` is the terminal line (advance is a no-op there).
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.0.len()
    }
}

/// Dialogue bookkeeping while the state machine is in the `Dialogue` state.
///
/// `line` always satisfies `line < script.len()` for the referenced NPC.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveDialogue {
    pub npc: NpcId,
    pub line: usize,
}

impl ActiveDialogue {
    /// Opens a dialogue with `npc`; conversations always start at line 0.
    pub fn open(npc: NpcId) -> Self {
        Self { npc, line: 0 }
    }
}
