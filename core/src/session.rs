use serde::{Deserialize, Serialize};

use crate::types::*;

/// Scripted inputs for a headless run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Overrides the config seed when present.
    #[serde(default)]
    pub seed: Option<Seed>,
    /// P2 is driven by the CPU; its scripted inputs are ignored.
    #[serde(default)]
    pub cpu: bool,
    pub inputs: Vec<[PlayerInput; 2]>,
}

impl Session {
    /// Inputs for `tick`; past the end of the script both sides stand still.
    pub fn inputs_at(&self, tick: usize) -> [PlayerInput; 2] {
        self.inputs.get(tick).copied().unwrap_or([NULL_INPUT; 2])
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn past_end_is_idle() {
        let session = Session {
            seed: None,
            cpu: false,
            inputs: vec![[
                PlayerInput {
                    held: button::MOVE_RIGHT,
                    pressed: 0,
                },
                NULL_INPUT,
            ]],
        };
        assert_eq!(session.inputs_at(0)[0].held, button::MOVE_RIGHT);
        assert_eq!(session.inputs_at(5), [NULL_INPUT; 2]);
    }

    #[test]
    fn parses_minimal_json() {
        let session: Session =
            serde_json::from_str(r#"{"inputs":[[{"held":1,"pressed":0},{"held":0,"pressed":8}]]}"#)
                .expect("valid session");
        assert_eq!(session.len(), 1);
        assert!(!session.cpu);
        assert_eq!(session.seed, None);
        assert!(session.inputs_at(0)[1].was_pressed(button::ATTACK));
    }
}
