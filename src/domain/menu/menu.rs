use super::choice::Choice;
use crate::domain::errors::MenuError;
use uuid::Uuid;

/// The user's dish list and its editing operations.
///
/// The menu is the only writer of choices; the wheel consumes a snapshot of
/// the enabled subset and never mutates it.
#[derive(Debug, Clone)]
pub struct Menu {
    choices: Vec<Choice>,
}

impl Menu {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self { choices }
    }

    /// The starter menu used on first launch or when the stored one is
    /// unreadable.
    pub fn default_dishes() -> Self {
        let labels = [
            "Margherita Pizza",
            "Chicken Stir-Fry",
            "Beef Tacos",
            "Mushroom Risotto",
            "Salmon Teriyaki",
            "Pad Thai",
            "Lentil Curry",
            "Spaghetti Carbonara",
            "Falafel Wrap",
            "Tonkotsu Ramen",
            "Greek Salad",
            "Shepherd's Pie",
        ];
        Self::new(labels.into_iter().map(Choice::new).collect())
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Snapshot of the enabled entries, in menu order. This is the list the
    /// wheel is built from.
    pub fn enabled_choices(&self) -> Vec<Choice> {
        self.choices.iter().filter(|c| c.enabled).cloned().collect()
    }

    pub fn enabled_count(&self) -> usize {
        self.choices.iter().filter(|c| c.enabled).count()
    }

    /// Adds a dish. Labels are trimmed; blank or duplicate labels are
    /// rejected so the wheel never shows two wedges the user cannot tell
    /// apart.
    pub fn add(&mut self, label: &str) -> Result<Choice, MenuError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(MenuError::BlankLabel);
        }
        if self
            .choices
            .iter()
            .any(|c| c.label.eq_ignore_ascii_case(label))
        {
            return Err(MenuError::DuplicateLabel {
                label: label.to_string(),
            });
        }
        let choice = Choice::new(label);
        self.choices.push(choice.clone());
        Ok(choice)
    }

    pub fn remove(&mut self, key: Uuid) -> Result<Choice, MenuError> {
        let position = self
            .choices
            .iter()
            .position(|c| c.key == key)
            .ok_or(MenuError::UnknownChoice { key })?;
        Ok(self.choices.remove(position))
    }

    pub fn set_enabled(&mut self, key: Uuid, enabled: bool) -> Result<(), MenuError> {
        let choice = self
            .choices
            .iter_mut()
            .find(|c| c.key == key)
            .ok_or(MenuError::UnknownChoice { key })?;
        choice.enabled = enabled;
        Ok(())
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::default_dishes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_has_twelve_enabled_dishes() {
        let menu = Menu::default_dishes();
        assert_eq!(menu.len(), 12);
        assert_eq!(menu.enabled_count(), 12);
    }

    #[test]
    fn test_add_trims_and_rejects_blank() {
        let mut menu = Menu::new(vec![]);
        let added = menu.add("  Gnocchi  ").unwrap().label.clone();
        assert_eq!(added, "Gnocchi");
        assert!(matches!(menu.add("   "), Err(MenuError::BlankLabel)));
    }

    #[test]
    fn test_add_rejects_duplicate_label_case_insensitive() {
        let mut menu = Menu::new(vec![]);
        menu.add("Bibimbap").unwrap();
        assert!(matches!(
            menu.add("bibimbap"),
            Err(MenuError::DuplicateLabel { .. })
        ));
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn test_remove_and_unknown_key() {
        let mut menu = Menu::new(vec![]);
        let key = menu.add("Pho").unwrap().key;
        let removed = menu.remove(key).unwrap();
        assert_eq!(removed.label, "Pho");
        assert!(matches!(
            menu.remove(key),
            Err(MenuError::UnknownChoice { .. })
        ));
    }

    #[test]
    fn test_set_enabled_filters_enabled_choices() {
        let mut menu = Menu::default_dishes();
        let key = menu.choices()[0].key;
        menu.set_enabled(key, false).unwrap();

        assert_eq!(menu.enabled_count(), 11);
        assert!(menu.enabled_choices().iter().all(|c| c.key != key));
        assert_eq!(menu.len(), 12);
    }
}
