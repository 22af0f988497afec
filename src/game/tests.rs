use proptest::prelude::*;

use crate::config::game::{BOARD_SIZE, PASS_START_BONUS, STARTING_MONEY};
use crate::game::board::{generate_board, is_purchasable};
use crate::game::dice::{roll_pair, RandomDice, ScriptedDice};
use crate::game::error::GameError;
use crate::game::state::Game;

fn two_player_game() -> Game {
    Game::new(&["Alice", "Bob"]).expect("valid game")
}

fn dice(faces: &[u32]) -> ScriptedDice {
    ScriptedDice::new(faces.to_vec()).expect("valid faces")
}

#[test]
fn test_new_game_seeds_players() {
    let game = Game::new(&["Alice", "Bob", "Carol"]).unwrap();
    assert_eq!(game.players().len(), 3);
    assert_eq!(game.current_index(), 0);
    for (i, player) in game.players().iter().enumerate() {
        assert_eq!(player.id, i);
        assert_eq!(player.money, STARTING_MONEY);
        assert_eq!(player.position, 0);
        assert!(player.properties.is_empty());
    }
    assert_eq!(game.players()[2].name, "Carol");
    assert!(!game.is_game_over());
}

#[test]
fn test_new_game_rejects_too_few_players() {
    let empty: [&str; 0] = [];
    assert!(matches!(Game::new(&empty), Err(GameError::InvalidArgument(_))));
    assert!(matches!(Game::new(&["Solo"]), Err(GameError::InvalidArgument(_))));
}

#[test]
fn test_new_game_rejects_too_many_or_blank_players() {
    let crowd: Vec<String> = (0..9).map(|i| format!("P{i}")).collect();
    assert!(matches!(Game::new(&crowd), Err(GameError::InvalidArgument(_))));
    assert!(matches!(Game::new(&["Alice", "  "]), Err(GameError::InvalidArgument(_))));
}

#[test]
fn test_board_layout() {
    let board = generate_board();
    assert_eq!(board.len(), BOARD_SIZE);
    for (i, slot) in board.iter().enumerate() {
        if i % 5 == 0 {
            assert!(slot.is_none(), "slot {i} should be a free tile");
            assert!(!is_purchasable(i));
        } else {
            let space = slot.as_ref().expect("purchasable slot");
            assert_eq!(space.position, i);
            assert_eq!(space.price, (i as i64 + 1) * 100);
            assert_eq!(space.rent, (i as i64 + 1) * 50);
            assert!(space.owner.is_none());
        }
    }
    assert_eq!(board.iter().filter(|s| s.is_some()).count(), 32);
}

#[test]
fn test_scripted_dice_validation() {
    assert!(ScriptedDice::new(vec![]).is_err());
    assert!(ScriptedDice::new(vec![0]).is_err());
    assert!(ScriptedDice::new(vec![7]).is_err());
    let mut d = dice(&[2, 5]);
    assert_eq!(roll_pair(&mut d), 7);
    assert_eq!(roll_pair(&mut d), 7);
}

#[test]
fn test_roll_distribution_peaks_at_seven() {
    let mut rng = RandomDice::seeded(7);
    let mut counts = [0u32; 13];
    for _ in 0..36_000 {
        counts[roll_pair(&mut rng) as usize] += 1;
    }
    assert_eq!(counts[0], 0);
    assert_eq!(counts[1], 0);
    let peak = (2..=12).max_by_key(|&s| counts[s]).unwrap();
    assert_eq!(peak, 7);
    // Expected 6000 sevens and 1000 twos.
    assert!((5400..6600).contains(&counts[7]));
    assert!((700..1300).contains(&counts[2]));
}

#[test]
fn test_move_wraps_and_pays_bonus() {
    let mut game = two_player_game();
    game.players[0].position = 38;

    let position = game.move_current_player_by(5).unwrap();

    assert_eq!(position, 3);
    assert_eq!(game.players[0].money, STARTING_MONEY + PASS_START_BONUS);
}

#[test]
fn test_move_without_wrap_has_no_bonus() {
    let mut game = two_player_game();
    let steps = game.move_current_player(&mut dice(&[3, 4])).unwrap();

    assert_eq!(steps, 7);
    assert_eq!(game.players[0].position, 7);
    assert_eq!(game.players[0].money, STARTING_MONEY);
    assert_eq!(game.players[1].position, 0);
}

#[test]
fn test_buy_property_records_ownership() {
    let mut game = two_player_game();
    game.move_current_player(&mut dice(&[3, 4])).unwrap();

    game.buy_property().unwrap();

    assert_eq!(game.players[0].money, 700);
    assert_eq!(game.space(7).unwrap().owner, Some(0));
    assert_eq!(game.players[0].properties, vec![7]);
    assert_eq!(game.owner_of(7).map(|p| p.name.as_str()), Some("Alice"));

    assert_eq!(
        game.buy_property(),
        Err(GameError::AlreadyOwned { position: 7, owner: 0 })
    );
    assert_eq!(game.players[0].properties.iter().filter(|&&p| p == 7).count(), 1);
}

#[test]
fn test_buy_property_owned_by_other_player() {
    let mut game = two_player_game();
    game.move_current_player_by(7).unwrap();
    game.buy_property().unwrap();
    game.next_player().unwrap();
    game.move_current_player_by(7).unwrap();

    assert_eq!(
        game.buy_property(),
        Err(GameError::AlreadyOwned { position: 7, owner: 0 })
    );
    assert!(game.players[1].properties.is_empty());
}

#[test]
fn test_buy_property_on_free_tile() {
    let mut game = two_player_game();
    assert_eq!(game.buy_property(), Err(GameError::NotPurchasable { position: 0 }));
    game.move_current_player_by(10).unwrap();
    assert_eq!(game.buy_property(), Err(GameError::NotPurchasable { position: 10 }));
}

#[test]
fn test_failed_buy_leaves_state_unchanged() {
    let mut game = two_player_game();
    game.players[0].money = 100;
    game.move_current_player_by(7).unwrap();
    let before = game.clone();

    assert_eq!(
        game.buy_property(),
        Err(GameError::InsufficientFunds { needed: 800, available: 100 })
    );
    assert_eq!(game, before);
    assert!(game.space(7).unwrap().owner.is_none());
}

#[test]
fn test_buy_with_exact_funds() {
    let mut game = two_player_game();
    game.players[0].money = 800;
    game.move_current_player_by(7).unwrap();

    game.buy_property().unwrap();

    assert_eq!(game.players[0].money, 0);
    assert_eq!(game.space(7).unwrap().owner, Some(0));
}

#[test]
fn test_rent_with_exact_funds() {
    let mut game = two_player_game();
    game.move_current_player_by(7).unwrap();
    game.buy_property().unwrap();
    game.next_player().unwrap();
    game.players[1].money = 400;
    game.move_current_player_by(7).unwrap();

    assert_eq!(game.pay_rent(), Ok(400));
    assert_eq!(game.players[1].money, 0);
    assert_eq!(game.players[0].money, 1100);
}

#[test]
fn test_rent_ignores_owner_outside_player_list() {
    let mut game = two_player_game();
    game.board[7].as_mut().unwrap().owner = Some(5);
    game.move_current_player_by(7).unwrap();
    let before = game.clone();

    assert_eq!(game.pay_rent(), Ok(0));
    assert_eq!(game, before);
}

#[test]
fn test_alice_buys_bob_pays_rent() {
    let mut game = two_player_game();
    let mut d = dice(&[3, 4]);

    game.move_current_player(&mut d).unwrap();
    assert_eq!(game.players[0].position, 7);
    game.buy_property().unwrap();
    assert_eq!(game.players[0].money, 700);
    game.next_player().unwrap();

    let outcome = game.roll_and_settle(&mut d).unwrap();

    assert_eq!(outcome.position, 7);
    assert_eq!(outcome.rent_paid, 400);
    assert!(!outcome.passed_start);
    assert_eq!(game.players[1].money, 1100);
    assert_eq!(game.players[0].money, 1100);
}

#[test]
fn test_rent_is_free_on_own_unowned_or_free_tiles() {
    let mut game = two_player_game();
    assert_eq!(game.pay_rent(), Ok(0));
    game.move_current_player_by(7).unwrap();
    assert_eq!(game.pay_rent(), Ok(0));
    game.buy_property().unwrap();
    assert_eq!(game.pay_rent(), Ok(0));
    assert_eq!(game.players[0].money, 700);
}

#[test]
fn test_unaffordable_rent_undoes_the_roll() {
    let mut game = two_player_game();
    game.move_current_player_by(7).unwrap();
    game.buy_property().unwrap();
    game.next_player().unwrap();
    game.players[1].money = 100;
    let before = game.clone();

    let result = game.roll_and_settle(&mut dice(&[3, 4]));

    assert_eq!(result, Err(GameError::InsufficientFunds { needed: 400, available: 100 }));
    assert_eq!(game, before);
}

#[test]
fn test_next_player_wraps() {
    let mut game = Game::new(&["A", "B", "C"]).unwrap();
    assert_eq!(game.next_player(), Ok(1));
    assert_eq!(game.next_player(), Ok(2));
    assert_eq!(game.next_player(), Ok(0));
}

#[test]
fn test_empty_game_reports_no_players() {
    let mut game = two_player_game();
    game.players.clear();

    assert_eq!(game.next_player(), Err(GameError::NoPlayers));
    assert_eq!(game.move_current_player(&mut dice(&[1])), Err(GameError::NoPlayers));
    assert_eq!(game.buy_property(), Err(GameError::NoPlayers));
    assert_eq!(game.pay_rent(), Err(GameError::NoPlayers));
    assert!(matches!(game.winner(), Err(GameError::NoPlayers)));
    assert!(!game.is_game_over());
}

#[test]
fn test_game_over_and_winner() {
    let mut game = Game::new(&["A", "B", "C"]).unwrap();
    assert_eq!(game.winner().unwrap().id, 0);

    game.players[1].money = 2000;
    game.players[2].money = 2000;
    assert_eq!(game.winner().unwrap().id, 1);

    assert!(!game.is_game_over());
    game.players[0].money = -1;
    assert!(game.is_game_over());
}

proptest! {
    #[test]
    fn prop_roll_in_range(seed in any::<u64>()) {
        let mut rng = RandomDice::seeded(seed);
        let game = two_player_game();
        for _ in 0..100 {
            let roll = game.roll_dice(&mut rng);
            prop_assert!((2..=12).contains(&roll));
        }
    }

    #[test]
    fn prop_rotation_returns_to_start(n in 2usize..=8, start in 0usize..8) {
        let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
        let mut game = Game::new(&names).unwrap();
        for _ in 0..(start % n) {
            game.next_player().unwrap();
        }
        let origin = game.current_index();
        for _ in 0..n {
            game.next_player().unwrap();
        }
        prop_assert_eq!(game.current_index(), origin);
    }

    #[test]
    fn prop_ownership_stays_consistent(faces in proptest::collection::vec(1u32..=6, 2..40)) {
        let mut game = Game::new(&["A", "B", "C"]).unwrap();
        let mut d = ScriptedDice::new(faces).unwrap();
        for _ in 0..30 {
            let _ = game.roll_and_settle(&mut d);
            let _ = game.buy_property();
            game.next_player().unwrap();
        }
        for space in game.board().iter().flatten() {
            if let Some(owner) = space.owner {
                prop_assert!(game.players()[owner].owns(space.position));
            }
        }
        for player in game.players() {
            for &position in &player.properties {
                prop_assert_eq!(game.space(position).unwrap().owner, Some(player.id));
            }
        }
    }
}
