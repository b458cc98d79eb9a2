//! Pure mapping from the working set to view models.
//!
//! Presenters never touch the terminal or the network; renderers repaint
//! from whatever these functions return, so a fresh working set always
//! produces a fully fresh surface.

use pawdeck_types::Player;

use crate::presentation::view_models::{CardViewModel, DetailViewModel, RosterViewModel};

/// One card per record, input order preserved. An empty working set is a
/// valid surface with zero cards, not an error.
pub fn build_roster(players: &[Player]) -> RosterViewModel {
    RosterViewModel {
        cards: players.iter().map(build_card).collect(),
    }
}

fn build_card(player: &Player) -> CardViewModel {
    CardViewModel {
        id: player.id,
        name: player.name.clone(),
        breed: player.breed.clone(),
        status: player.status.clone(),
        image_url: player.image_url.clone(),
    }
}

pub fn build_detail(player: &Player) -> DetailViewModel {
    DetailViewModel {
        id: player.id,
        name: player.name.clone(),
        breed: player.breed.clone(),
        status: player.status.clone(),
        image_url: player.image_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawdeck_types::PlayerId;

    fn player(id: u64, name: &str) -> Player {
        Player {
            id: PlayerId::new(id),
            name: name.to_string(),
            breed: "Corgi".to_string(),
            status: "field".to_string(),
            image_url: format!("http://img/{}.png", name),
        }
    }

    #[test]
    fn one_card_per_record_in_input_order() {
        let players = vec![player(3, "Maple"), player(1, "Ziggy"), player(2, "Biscuit")];
        let roster = build_roster(&players);

        assert_eq!(roster.len(), 3);
        let order: Vec<&str> = roster.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(order, ["Maple", "Ziggy", "Biscuit"]);
        assert_eq!(roster.cards[0].id, PlayerId::new(3));
    }

    #[test]
    fn empty_working_set_yields_empty_surface() {
        let roster = build_roster(&[]);
        assert!(roster.is_empty());
    }

    #[test]
    fn card_carries_all_four_display_fields() {
        let roster = build_roster(&[player(7, "Maple")]);
        let card = &roster.cards[0];
        assert_eq!(card.breed, "Corgi");
        assert_eq!(card.status, "field");
        assert_eq!(card.image_url, "http://img/Maple.png");
    }
}
