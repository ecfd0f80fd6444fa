//! Favorite entries and the pure toggle operation on a favorites list.

use serde::{Deserialize, Serialize};

/// A favorited entity. Identity is the numeric id kept as a string (the
/// form it takes in routes and in the persisted JSON payload).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub name: String,
}

/// Toggle membership of `{id, name}` in a favorites list.
///
/// Present → removed; absent → appended, preserving insertion order for the
/// remaining entries. Since id is the set key, no duplicate can be created.
pub fn toggled(mut list: Vec<Favorite>, id: &str, name: &str) -> Vec<Favorite> {
    if let Some(pos) = list.iter().position(|f| f.id == id) {
        list.remove(pos);
    } else {
        list.push(Favorite {
            id: id.to_string(),
            name: name.to_string(),
        });
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(id: &str, name: &str) -> Favorite {
        Favorite {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let list = toggled(Vec::new(), "25", "pikachu");
        assert_eq!(list, vec![favorite("25", "pikachu")]);
        let list = toggled(list, "25", "pikachu");
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let initial = vec![favorite("1", "bulbasaur"), favorite("4", "charmander")];
        let once = toggled(initial.clone(), "7", "squirtle");
        let twice = toggled(once, "7", "squirtle");
        assert_eq!(twice, initial);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let list = toggled(Vec::new(), "4", "charmander");
        let list = toggled(list, "1", "bulbasaur");
        let list = toggled(list, "7", "squirtle");
        let list = toggled(list, "1", "bulbasaur");
        let names: Vec<&str> = list.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["charmander", "squirtle"]);
    }
}
