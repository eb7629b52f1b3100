//! End-to-end scenarios driving the engine facade the way a real caller
//! would: submit actions, read back state, never reach into phase modules
//! directly.

use pidro_core::action::Action;
use pidro_core::engine;
use pidro_core::errors::DomainError;
use pidro_core::state::{GameConfig, Phase, Position, Team};

fn play_bot_move(state: &pidro_core::GameState) -> Option<(Position, Action)> {
    let position = state.current_turn?;
    let mut actions = engine::legal_actions(state, position);
    if actions.is_empty() {
        return None;
    }
    Some((position, actions.remove(0)))
}

fn run_to_completion(mut state: pidro_core::GameState, max_steps: usize) -> pidro_core::GameState {
    for _ in 0..max_steps {
        if engine::game_over(&state) {
            break;
        }
        let Some((position, action)) = play_bot_move(&state) else { break };
        state = engine::apply_action(&state, position, action).expect("bot only submits legal actions");
    }
    state
}

#[test]
fn dealer_cannot_pass_when_everyone_else_has() {
    let state = engine::new_game(1, GameConfig::default());
    assert_eq!(state.phase, Phase::Bidding);
    let dealer = state.current_dealer.expect("dealer set by dealer_selection");
    let order = pidro_core::phase::bidding::bidding_order(dealer);

    let mut state = state;
    for &pos in &order[..3] {
        state = engine::apply_action(&state, pos, Action::Pass).expect("non-dealer pass is legal");
    }

    let result = engine::apply_action(&state, dealer, Action::Pass);
    assert_eq!(result, Err(DomainError::DealerMustBid));

    let bid_amount = state.config.min_bid;
    let after_bid = engine::apply_action(&state, dealer, Action::Bid(bid_amount)).expect("dealer must be able to bid");
    assert_eq!(after_bid.phase, Phase::Declaring);
    assert_eq!(after_bid.highest_bid, Some((dealer, bid_amount)));
}

#[test]
fn bidding_war_is_capped_at_max_bid() {
    let state = engine::new_game(2, GameConfig::default());
    let dealer = state.current_dealer.expect("dealer set");
    let max = state.config.max_bid;

    let result = engine::apply_action(&state, pidro_core::phase::bidding::bidding_order(dealer)[0], Action::Bid(max + 1));
    assert_eq!(
        result,
        Err(DomainError::BidOutOfRange { min: state.config.min_bid, max, got: max + 1 })
    );
}

#[test]
fn full_automatic_game_reaches_completion() {
    let state = engine::new_game(12345, GameConfig::default());
    let final_state = run_to_completion(state, 20_000);
    assert!(engine::game_over(&final_state), "game should reach `complete` within the step budget");
    assert!(final_state.cumulative_scores[0] >= final_state.config.winning_score
        || final_state.cumulative_scores[1] >= final_state.config.winning_score);
}

#[test]
fn notation_round_trips_through_a_live_game() {
    let state = engine::new_game(7, GameConfig::default());
    let state = run_to_completion(state, 200);
    let encoded = engine::to_notation(&state);
    let decoded = engine::from_notation(&encoded).expect("encoded notation must parse");
    assert_eq!(decoded.hand_number, state.hand_number);
    assert_eq!(decoded.phase, state.phase.name());
}

#[test]
fn replay_reproduces_the_live_state_for_auto_rob_games() {
    let seed = 555;
    let config = GameConfig::default();
    let initial = pidro_core::GameState::new(seed, config);
    let live = run_to_completion(engine::new_game(seed, config), 20_000);

    let replayed = engine::replay_events(&initial, &live.events).expect("replay must succeed");
    assert_eq!(replayed.cumulative_scores, live.cumulative_scores);
    assert_eq!(replayed.phase, live.phase);
    assert_eq!(replayed.hand_number, live.hand_number);
}

#[test]
fn undo_restores_the_state_before_the_last_action() {
    let state = engine::new_game(9, GameConfig::default());
    let dealer = state.current_dealer.expect("dealer set");
    let first_bidder = pidro_core::phase::bidding::bidding_order(dealer)[0];
    let after_pass = engine::apply_action(&state, first_bidder, Action::Pass).expect("pass is legal");

    let undone = engine::undo(&after_pass).expect("undo must succeed with at least one event");
    assert_eq!(undone.bids.len(), state.bids.len());
    assert_eq!(undone.current_turn, state.current_turn);
}

#[test]
fn undo_with_no_history_is_an_error() {
    let state = pidro_core::GameState::new(1, GameConfig::default());
    assert_eq!(engine::undo(&state), Err(DomainError::NoHistory));
}

#[test]
fn wrong_five_counts_toward_the_bidding_teams_points() {
    // Spades trump: the wrong-5 is the 5 of clubs (same color). Verify the
    // point_value/is_trump contract the scoring phase relies on.
    use pidro_core::cards::{is_trump, point_value, Card, Rank, Suit};
    let wrong_five = Card { rank: Rank::Five, suit: Suit::Clubs };
    assert!(is_trump(wrong_five, Suit::Spades));
    assert_eq!(point_value(wrong_five, Suit::Spades), 5);
}

#[test]
fn scenario_b_bidding_war_tops_at_fourteen() {
    let mut state = pidro_core::GameState::new(2, GameConfig::default());
    state.phase = Phase::Bidding;
    state.current_dealer = Some(Position::North);
    // bidding_order(North) = [East, South, West, North].
    let state = engine::apply_action(&state, Position::East, Action::Bid(13)).expect("east bids 13");
    let state = engine::apply_action(&state, Position::South, Action::Bid(14)).expect("south bids 14");
    let state = engine::apply_action(&state, Position::West, Action::Bid(14))
        .expect("west tops the incumbent's 14, last 14 wins");
    let state = engine::apply_action(&state, Position::North, Action::Pass).expect("dealer may pass once someone bid");

    assert_eq!(state.highest_bid, Some((Position::West, 14)));
    assert_eq!(state.phase, Phase::Declaring);
}

#[test]
fn scenario_b_repeating_the_incumbents_own_bid_is_still_rejected() {
    let mut state = pidro_core::GameState::new(3, GameConfig::default());
    state.phase = Phase::Bidding;
    state.current_dealer = Some(Position::North);
    let state = engine::apply_action(&state, Position::East, Action::Bid(14)).expect("east bids max");
    let result = engine::apply_action(&state, Position::South, Action::Bid(14));
    assert_eq!(result, Err(DomainError::BidTooLow { current: 14 }));
}

#[test]
fn scenario_d_dealer_robs_an_eleven_card_pool() {
    use pidro_core::cards::{Card, Rank, Suit};
    use pidro_core::event::EventKind;

    let trump = Suit::Hearts;
    let north_hand = vec![
        Card { rank: Rank::Ace, suit: Suit::Hearts },
        Card { rank: Rank::King, suit: Suit::Hearts },
        Card { rank: Rank::Queen, suit: Suit::Hearts },
    ];
    let six_of = |suit: Suit| -> Vec<Card> {
        [Rank::Two, Rank::Three, Rank::Four, Rank::Six, Rank::Seven, Rank::Eight]
            .iter()
            .map(|&r| Card { rank: r, suit })
            .collect()
    };
    let deck: Vec<Card> = [Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
        .iter()
        .map(|&r| Card { rank: r, suit: Suit::Clubs })
        .chain([Rank::Nine, Rank::Ten].iter().map(|&r| Card { rank: r, suit: Suit::Diamonds }))
        .collect();
    assert_eq!(deck.len(), 8);

    let mut state = pidro_core::GameState::new(99, GameConfig::default());
    state.phase = Phase::SecondDeal;
    state.current_dealer = Some(Position::North);
    state.trump_suit = Some(trump);
    state.player_mut(Position::North).hand = north_hand;
    state.player_mut(Position::East).hand = six_of(Suit::Clubs);
    state.player_mut(Position::South).hand = six_of(Suit::Diamonds);
    state.player_mut(Position::West).hand = six_of(Suit::Spades);
    state.deck = deck;

    let result = pidro_core::phase::second_deal::run(&state);

    assert_eq!(result.dealer_pool_size, 11);
    assert_eq!(result.player(Position::North).hand.len(), state.config.hand_size as usize);
    let robbed = result
        .events
        .iter()
        .find_map(|e| match &e.kind {
            EventKind::DealerRobbedPack { position, taken_count, kept, .. } if *position == Position::North => {
                Some((*taken_count, kept.len()))
            }
            _ => None,
        })
        .expect("dealer_robbed_pack event must be emitted");
    assert_eq!(robbed, (8, 6));
}

#[test]
fn scenario_e_kill_rule_removes_lowest_nonpoint_trump() {
    use pidro_core::cards::{Card, Rank, Suit};
    let trump = Suit::Hearts;
    let mut state = pidro_core::GameState::new(1, GameConfig::default());
    state.trump_suit = Some(trump);
    state.player_mut(Position::North).hand = vec![
        Card { rank: Rank::Ace, suit: Suit::Hearts },
        Card { rank: Rank::Ten, suit: Suit::Hearts },
        Card { rank: Rank::Two, suit: Suit::Hearts },
        Card { rank: Rank::King, suit: Suit::Hearts },
        Card { rank: Rank::Queen, suit: Suit::Hearts },
        Card { rank: Rank::Nine, suit: Suit::Hearts },
        Card { rank: Rank::Eight, suit: Suit::Hearts },
    ];

    let result = pidro_core::phase::kill::run(&state);

    let eight_of_hearts = Card { rank: Rank::Eight, suit: Suit::Hearts };
    assert_eq!(result.killed_cards[Position::North.index()], vec![eight_of_hearts]);
    assert_eq!(result.player(Position::North).hand.len(), 6);
    assert!(!result.player(Position::North).hand.contains(&eight_of_hearts));
}

#[test]
fn kill_rule_exempts_a_player_with_too_many_point_trumps_to_kill_down() {
    use pidro_core::cards::{Card, Rank, Suit};
    let trump = Suit::Hearts;
    let mut state = pidro_core::GameState::new(1, GameConfig::default());
    state.trump_suit = Some(trump);
    // Five point trumps (A, 10, 2, right-5, wrong-5) plus three plain clubs:
    // eight cards, excess two, but zero non-point trumps to kill: the whole
    // hand is retained and no kill event fires.
    let hand = vec![
        Card { rank: Rank::Ace, suit: Suit::Hearts },
        Card { rank: Rank::Ten, suit: Suit::Hearts },
        Card { rank: Rank::Two, suit: Suit::Hearts },
        Card { rank: Rank::Five, suit: Suit::Hearts },
        Card { rank: Rank::Five, suit: Suit::Diamonds },
        Card { rank: Rank::Three, suit: Suit::Clubs },
        Card { rank: Rank::Four, suit: Suit::Clubs },
        Card { rank: Rank::Six, suit: Suit::Clubs },
    ];
    state.player_mut(Position::North).hand = hand.clone();

    let result = pidro_core::phase::kill::run(&state);

    assert_eq!(result.player(Position::North).hand, hand);
    assert!(result.killed_cards[Position::North.index()].is_empty());
    assert!(result.events.is_empty());
}

#[test]
fn scenario_f_two_of_trump_credits_its_players_team() {
    use pidro_core::cards::{Card, Rank, Suit};
    let trump = Suit::Hearts;
    let mut state = pidro_core::GameState::new(1, GameConfig::default());
    state.phase = Phase::Playing;
    state.trump_suit = Some(trump);
    state.current_turn = Some(Position::North);
    state.current_trick = Some(pidro_core::state::Trick::new(0, Position::North));
    // North (NorthSouth) leads and wins with K♥; East (EastWest) holds 2♥.
    state.player_mut(Position::North).hand = vec![Card { rank: Rank::King, suit: Suit::Hearts }];
    state.player_mut(Position::East).hand = vec![Card { rank: Rank::Two, suit: Suit::Hearts }];
    state.player_mut(Position::South).hand = vec![Card { rank: Rank::Ten, suit: Suit::Hearts }];
    state.player_mut(Position::West).hand = vec![Card { rank: Rank::Three, suit: Suit::Hearts }];

    let state = pidro_core::phase::play::play(&state, Position::North, Card { rank: Rank::King, suit: Suit::Hearts })
        .expect("north leads K♥");
    let state = pidro_core::phase::play::play(&state, Position::East, Card { rank: Rank::Two, suit: Suit::Hearts })
        .expect("east follows with 2♥");
    let state = pidro_core::phase::play::play(&state, Position::South, Card { rank: Rank::Ten, suit: Suit::Hearts })
        .expect("south follows with 10♥");
    let state = pidro_core::phase::play::play(&state, Position::West, Card { rank: Rank::Three, suit: Suit::Hearts })
        .expect("west follows with 3♥, completing the trick");

    // Total points: K=0, 10=1, 2=1, 3=0 -> 2. North's team (winner) banks
    // points-1=1; East's team (2-of-trump holder) banks the other 1.
    assert_eq!(state.hand_points, [1, 1]);
    assert_eq!(state.tricks.last().and_then(|t| t.winner), Some(Position::North));
}

#[test]
fn scenario_g_failed_bid_sets_the_bidding_team_back_by_the_bid() {
    let mut state = pidro_core::GameState::new(1, GameConfig::default());
    state.highest_bid = Some((Position::North, 10));
    state.bidding_team = Some(Team::NorthSouth);
    state.hand_points = [8, 6];

    let result = pidro_core::phase::scoring::run(&state);

    assert_eq!(result.cumulative_scores, [-10, 6]);
}

#[test]
fn scenario_i_bidding_team_wins_when_both_teams_reach_the_target_together() {
    let mut state = pidro_core::GameState::new(1, GameConfig::default());
    state.config.winning_score = 62;
    state.highest_bid = Some((Position::East, 10));
    state.bidding_team = Some(Team::EastWest);
    // North-South (defenders) end at 64, East-West (bidders) end at 63;
    // the higher raw score belongs to the defenders, but the bidding team
    // still wins because both crossed the target in the same hand.
    state.cumulative_scores = [0, 0];
    state.hand_points = [64, 63];

    let result = pidro_core::phase::scoring::run(&state);

    assert_eq!(result.cumulative_scores, [64, 63]);
    assert_eq!(result.phase, Phase::Complete);
    let won = result.events.iter().find_map(|e| match &e.kind {
        pidro_core::event::EventKind::GameWon { team } => Some(*team),
        _ => None,
    });
    assert_eq!(won, Some(Team::EastWest));
}

#[test]
fn only_one_team_crossing_the_target_wins_on_its_own_raw_score() {
    let mut state = pidro_core::GameState::new(1, GameConfig::default());
    state.config.winning_score = 62;
    state.highest_bid = Some((Position::East, 10));
    state.bidding_team = Some(Team::EastWest);
    state.cumulative_scores = [0, 0];
    // Only North-South crosses the target; East-West is the bidding team
    // but does not win here.
    state.hand_points = [64, 10];

    let result = pidro_core::phase::scoring::run(&state);

    let won = result.events.iter().find_map(|e| match &e.kind {
        pidro_core::event::EventKind::GameWon { team } => Some(*team),
        _ => None,
    });
    assert_eq!(won, Some(Team::NorthSouth));
}
