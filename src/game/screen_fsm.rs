use std::fmt;

use rust_fsm::state_machine;

/*
 * Start
 *    "Aloita" button
 * Game
 *    Pick words, "Valmis", score
 *    "Uudestaan" mounts a new round on the same screen
 */
state_machine! {
    derive(Debug, Clone, PartialEq)
    pub ScreenFsm(Start)

    Start => {
        Begin => Game
    },
    Game => {
        Restart => Game
    }
}

impl fmt::Display for ScreenFsmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
