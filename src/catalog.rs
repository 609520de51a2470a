//! Entity registry: people, works, and the credits linking them.
//!
//! Entities live in arenas addressed by [`PersonId`]/[`WorkId`]. A credit is
//! an id pair in a shared table, so people and works never hold references
//! to each other and know nothing about any graph built from them.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Gender value counted by the diversity test.
pub const FEMALE: &str = "Female";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PersonId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WorkId(pub usize);

/// An actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub name: String,
    pub gender: String,
}

/// A movie with its per-criterion test results (`true` = passed).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Work {
    pub title: String,
    pub test_results: Vec<bool>,
}

impl Work {
    /// Number of criteria this work passed.
    pub fn passed_count(&self) -> usize {
        self.test_results.iter().filter(|&&passed| passed).count()
    }
}

/// One appearance of a person in a work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credit {
    pub work: WorkId,
    pub person: PersonId,
}

/// De-duplicating registry of people and works plus their credits.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    people: Vec<Person>,
    works: Vec<Work>,
    credits: Vec<Credit>,
    person_index: HashMap<String, PersonId>,
    work_index: HashMap<String, WorkId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` appears in `title`.
    ///
    /// Both entities are created on first sight. A person's gender is taken
    /// from their first credit.
    pub fn add_credit(&mut self, title: &str, name: &str, gender: &str) -> Credit {
        let work = self.intern_work(title);
        let person = self.intern_person(name, gender);
        let credit = Credit { work, person };
        self.credits.push(credit);
        credit
    }

    fn intern_work(&mut self, title: &str) -> WorkId {
        if let Some(&id) = self.work_index.get(title) {
            return id;
        }
        let id = WorkId(self.works.len());
        self.works.push(Work {
            title: title.to_string(),
            test_results: Vec::new(),
        });
        self.work_index.insert(title.to_string(), id);
        id
    }

    fn intern_person(&mut self, name: &str, gender: &str) -> PersonId {
        if let Some(&id) = self.person_index.get(name) {
            return id;
        }
        let id = PersonId(self.people.len());
        self.people.push(Person {
            name: name.to_string(),
            gender: gender.to_string(),
        });
        self.person_index.insert(name.to_string(), id);
        id
    }

    /// Append test results to a known work. Returns `false` for unknown titles.
    pub fn record_test_results(&mut self, title: &str, results: &[bool]) -> bool {
        match self.work_index.get(title) {
            Some(&WorkId(i)) => {
                self.works[i].test_results.extend_from_slice(results);
                true
            }
            None => false,
        }
    }

    pub fn person_id(&self, name: &str) -> Option<PersonId> {
        self.person_index.get(name).copied()
    }

    pub fn work_id(&self, title: &str) -> Option<WorkId> {
        self.work_index.get(title).copied()
    }

    pub fn is_person(&self, name: &str) -> bool {
        self.person_index.contains_key(name)
    }

    pub fn is_work(&self, title: &str) -> bool {
        self.work_index.contains_key(title)
    }

    pub fn person(&self, id: PersonId) -> &Person {
        &self.people[id.0]
    }

    pub fn work(&self, id: WorkId) -> &Work {
        &self.works[id.0]
    }

    /// People in first-seen order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Works in first-seen order.
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn credits(&self) -> &[Credit] {
        &self.credits
    }

    /// Works a person is credited in, in credit order.
    pub fn works_of(&self, person: PersonId) -> Vec<WorkId> {
        self.credits
            .iter()
            .filter(|c| c.person == person)
            .map(|c| c.work)
            .collect()
    }

    /// People credited in a work, in credit order.
    pub fn cast_of(&self, work: WorkId) -> Vec<PersonId> {
        self.credits
            .iter()
            .filter(|c| c.work == work)
            .map(|c| c.person)
            .collect()
    }

    /// Share of the cast (by credit) whose gender is [`FEMALE`], in percent.
    /// `None` when the work has no cast.
    pub fn female_percentage(&self, work: WorkId) -> Option<f64> {
        let cast = self.cast_of(work);
        if cast.is_empty() {
            return None;
        }
        let female = cast
            .iter()
            .filter(|&&p| self.person(p).gender == FEMALE)
            .count();
        Some(female as f64 * 100.0 / cast.len() as f64)
    }

    /// One-line summary of a person: `Name (Gender) has played in: A, B.`
    pub fn describe_person(&self, id: PersonId) -> String {
        let person = self.person(id);
        let titles: Vec<&str> = self
            .works_of(id)
            .into_iter()
            .map(|w| self.work(w).title.as_str())
            .collect();
        format!(
            "{} ({}) has played in: {}",
            person.name,
            person.gender,
            sentence(&titles)
        )
    }

    /// One-line summary of a work: `Title with cast: x, y.`
    pub fn describe_work(&self, id: WorkId) -> String {
        let names: Vec<&str> = self
            .cast_of(id)
            .into_iter()
            .map(|p| self.person(p).name.as_str())
            .collect();
        format!("{} with cast: {}", self.work(id).title, sentence(&names))
    }
}

/// Comma-joined list terminated by a period; empty for no items.
fn sentence(items: &[&str]) -> String {
    if items.is_empty() {
        String::new()
    } else {
        format!("{}.", items.join(", "))
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ACTORS: ")?;
        for i in 0..self.people.len() {
            writeln!(f, "{}", self.describe_person(PersonId(i)))?;
        }
        writeln!(f)?;
        writeln!(f, "MOVIES:")?;
        for i in 0..self.works.len() {
            writeln!(f, "{}", self.describe_work(WorkId(i)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut c = Catalog::new();
        c.add_credit("Titanic", "Leonardo DiCaprio", "Male");
        c.add_credit("Titanic", "Kate Winslet", "Female");
        c.add_credit("Revolutionary Road", "Kate Winslet", "Female");
        c.add_credit("Revolutionary Road", "Leonardo DiCaprio", "Male");
        c
    }

    #[test]
    fn test_entities_are_deduplicated() {
        let c = sample();
        assert_eq!(c.people().len(), 2);
        assert_eq!(c.works().len(), 2);
        assert_eq!(c.credits().len(), 4);
        assert_eq!(c.person_id("Kate Winslet"), Some(PersonId(1)));
        assert_eq!(c.work_id("Revolutionary Road"), Some(WorkId(1)));
        assert_eq!(c.person_id("Nobody"), None);
    }

    #[test]
    fn test_first_credit_sets_gender() {
        let mut c = sample();
        c.add_credit("Inception", "Leonardo DiCaprio", "Unknown");
        let id = c.person_id("Leonardo DiCaprio").unwrap();
        assert_eq!(c.person(id).gender, "Male");
    }

    #[test]
    fn test_relationship_lookups() {
        let c = sample();
        let kate = c.person_id("Kate Winslet").unwrap();
        let titanic = c.work_id("Titanic").unwrap();
        assert_eq!(c.works_of(kate), vec![WorkId(0), WorkId(1)]);
        assert_eq!(c.cast_of(titanic), vec![PersonId(0), PersonId(1)]);
        assert!(c.is_person("Kate Winslet"));
        assert!(!c.is_person("Titanic"));
        assert!(c.is_work("Titanic"));
    }

    #[test]
    fn test_test_results() {
        let mut c = sample();
        assert!(c.record_test_results("Titanic", &[true, false, true]));
        assert!(c.record_test_results("Titanic", &[true]));
        assert!(!c.record_test_results("Avatar", &[true]));
        let titanic = c.work(c.work_id("Titanic").unwrap());
        assert_eq!(titanic.test_results.len(), 4);
        assert_eq!(titanic.passed_count(), 3);
    }

    #[test]
    fn test_female_percentage() {
        let mut c = sample();
        c.add_credit("Titanic", "Billy Zane", "Male");
        c.add_credit("Titanic", "Gloria Stuart", "Female");
        let titanic = c.work_id("Titanic").unwrap();
        assert_eq!(c.female_percentage(titanic), Some(50.0));

        let mut empty = Catalog::new();
        empty.intern_work("Silent Film");
        assert_eq!(empty.female_percentage(WorkId(0)), None);
    }

    #[test]
    fn test_describe() {
        let c = sample();
        assert_eq!(
            c.describe_person(PersonId(1)),
            "Kate Winslet (Female) has played in: Titanic, Revolutionary Road."
        );
        assert_eq!(
            c.describe_work(WorkId(0)),
            "Titanic with cast: Leonardo DiCaprio, Kate Winslet."
        );
        let shown = c.to_string();
        assert!(shown.starts_with("ACTORS: \n"));
        assert!(shown.contains("\nMOVIES:\n"));
    }
}
