//! One module per phase's rule logic. Each automatic phase exposes a pure
//! `run(&GameState) -> GameState`; manual phases expose the action(s) that
//! apply to them as `Result<GameState, DomainError>`.

pub mod bidding;
pub mod dealer_rob;
pub mod dealer_selection;
pub mod dealing;
pub mod discard;
pub mod hand_complete;
pub mod kill;
pub mod play;
pub mod scoring;
pub mod second_deal;
pub mod trump;
