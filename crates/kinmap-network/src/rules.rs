//! Relationship rules — pure predicates, strength bases, and text templates.
//!
//! Nothing here draws randomness. The probability gates that decide whether
//! an eligible relationship becomes a candidate live in the inferencer;
//! this module only says which relationship kinds a pair qualifies for and
//! how each kind is scored and described.

use kinmap_core::Profile;

use crate::types::RelationshipType;

/// Orientations compatible with any partner.
pub const UNIVERSAL_ORIENTATIONS: &[&str] = &["Pansexual", "Bisexual", "Queer"];
/// Marital statuses open to a romantic connection.
pub const AVAILABLE_STATUSES: &[&str] = &["Single", "Divorced", "Widowed"];

pub const BUSINESS_CHANCE: f64 = 0.3;
pub const NEIGHBOR_CHANCE: f64 = 0.4;
pub const DISTANT_FRIEND_CHANCE: f64 = 0.2;
pub const ORIENTATION_COIN: f64 = 0.5;
pub const ROMANTIC_CHANCE: f64 = 0.1;
pub const EDUCATION_CHANCE: f64 = 0.3;

/// Maximum jitter applied to a strength base, in either direction.
pub const STRENGTH_JITTER: f64 = 0.1;

/// Shared attributes of a profile pair, computed once per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairFacts {
    pub shared_surname: bool,
    pub age_gap: u32,
    pub same_city: bool,
    pub same_company: bool,
    pub same_industry: bool,
    pub same_country: bool,
    pub both_under_30: bool,
    pub both_under_50: bool,
    pub both_adults: bool,
    pub both_available: bool,
    pub both_single: bool,
    pub universal_orientation: bool,
    pub medical_worker: bool,
    pub legal_worker: bool,
    pub criminal_record: bool,
}

impl PairFacts {
    pub fn new(a: &Profile, b: &Profile) -> Self {
        let either_title = |needle: &str| a.job_title.contains(needle) || b.job_title.contains(needle);

        Self {
            shared_surname: a.last_name == b.last_name,
            age_gap: a.age_gap(b),
            same_city: a.city == b.city,
            same_company: a.company == b.company,
            same_industry: a.industry == b.industry,
            same_country: a.country == b.country,
            both_under_30: a.age < 30 && b.age < 30,
            both_under_50: a.age < 50 && b.age < 50,
            both_adults: a.age >= 18 && b.age >= 18,
            both_available: is_available(&a.marital_status) && is_available(&b.marital_status),
            both_single: a.marital_status == "Single" && b.marital_status == "Single",
            universal_orientation: orientation_is_universal(&a.sexual_orientation)
                || orientation_is_universal(&b.sexual_orientation),
            medical_worker: either_title("Doctor") || either_title("Nurse"),
            legal_worker: either_title("Attorney") || either_title("Legal"),
            criminal_record: a.criminal_record || b.criminal_record,
        }
    }

    /// Surname match, or an age gap spanning parent/child or distant siblings.
    pub fn family_eligible(&self) -> bool {
        self.shared_surname || (15..=40).contains(&self.age_gap)
    }

    pub fn colleague_eligible(&self) -> bool {
        self.same_company
    }

    /// Same industry at a different company.
    pub fn business_eligible(&self) -> bool {
        !self.same_company && self.same_industry
    }

    pub fn neighbor_eligible(&self) -> bool {
        self.same_city
    }

    pub fn friend_eligible(&self) -> bool {
        self.age_gap <= 15
    }

    pub fn romantic_eligible(&self) -> bool {
        self.age_gap <= 20 && self.both_adults && self.both_available
    }

    pub fn education_eligible(&self) -> bool {
        self.age_gap <= 5 && self.same_country
    }

    pub fn healthcare_eligible(&self) -> bool {
        self.same_city && self.medical_worker
    }

    pub fn legal_eligible(&self) -> bool {
        self.criminal_record && self.legal_worker
    }

    pub fn is_eligible(&self, kind: RelationshipType) -> bool {
        match kind {
            RelationshipType::Family => self.family_eligible(),
            RelationshipType::Colleague => self.colleague_eligible(),
            RelationshipType::Business => self.business_eligible(),
            RelationshipType::Neighbor => self.neighbor_eligible(),
            RelationshipType::Friend => self.friend_eligible(),
            RelationshipType::SocialMedia => true,
            RelationshipType::Romantic => self.romantic_eligible(),
            RelationshipType::Education => self.education_eligible(),
            RelationshipType::Healthcare => self.healthcare_eligible(),
            RelationshipType::Legal => self.legal_eligible(),
        }
    }
}

/// Rule evaluation order. Random draws follow this order too.
pub const RULE_ORDER: &[RelationshipType] = &[
    RelationshipType::Family,
    RelationshipType::Colleague,
    RelationshipType::Business,
    RelationshipType::Neighbor,
    RelationshipType::Friend,
    RelationshipType::SocialMedia,
    RelationshipType::Romantic,
    RelationshipType::Education,
    RelationshipType::Healthcare,
    RelationshipType::Legal,
];

/// Kinds whose deterministic predicate holds for the pair, in rule order.
pub fn eligible_types(a: &Profile, b: &Profile) -> Vec<RelationshipType> {
    let facts = PairFacts::new(a, b);
    RULE_ORDER
        .iter()
        .copied()
        .filter(|kind| facts.is_eligible(*kind))
        .collect()
}

pub fn orientation_is_universal(orientation: &str) -> bool {
    UNIVERSAL_ORIENTATIONS.contains(&orientation)
}

fn is_available(marital_status: &str) -> bool {
    AVAILABLE_STATUSES.contains(&marital_status)
}

/// Chance of a social-media connection, capped at 0.9.
pub fn social_media_probability(facts: &PairFacts) -> f64 {
    let mut probability = 0.6;
    if facts.both_under_30 {
        probability += 0.3;
    } else if facts.both_under_50 {
        probability += 0.1;
    }
    if facts.same_city {
        probability += 0.2;
    }
    if facts.same_industry {
        probability += 0.1;
    }
    f64::min(probability, 0.9)
}

/// Strength before jitter.
pub fn strength_base(kind: RelationshipType, facts: &PairFacts) -> f64 {
    match kind {
        RelationshipType::Family if facts.shared_surname => 0.95,
        RelationshipType::Family => 0.9,
        RelationshipType::Romantic => 0.8,
        RelationshipType::Colleague if facts.same_company => 0.8,
        RelationshipType::Colleague => 0.7,
        RelationshipType::Friend => {
            let mut strength = 0.6;
            if facts.same_city {
                strength += 0.1;
            }
            if facts.age_gap <= 5 {
                strength += 0.1;
            }
            strength
        }
        RelationshipType::Neighbor => 0.4,
        RelationshipType::SocialMedia => 0.3,
        _ => 0.5,
    }
}

/// Short label for a relationship.
pub fn describe(kind: RelationshipType, source: &Profile, target: &Profile) -> String {
    let facts = PairFacts::new(source, target);
    match kind {
        RelationshipType::Family if facts.shared_surname => match facts.age_gap {
            gap if gap >= 20 => "Parent-Child".to_string(),
            gap if gap <= 10 => "Siblings".to_string(),
            _ => "Extended Family".to_string(),
        },
        RelationshipType::Family => "Family Friend".to_string(),
        RelationshipType::Colleague if facts.same_company => {
            format!("Colleagues at {}", source.company)
        }
        RelationshipType::Colleague => format!("{} Professional Network", source.industry),
        RelationshipType::Friend if facts.same_city => format!("Friends in {}", source.city),
        RelationshipType::Friend => "Long-distance Friends".to_string(),
        RelationshipType::Romantic if facts.both_single => "Dating".to_string(),
        RelationshipType::Romantic => "Romantic Connection".to_string(),
        RelationshipType::Neighbor => format!("Neighbors in {}", source.city),
        RelationshipType::Business => format!("{} Business Connection", source.industry),
        RelationshipType::SocialMedia => "Social Media Connection".to_string(),
        RelationshipType::Education => "School Connection".to_string(),
        RelationshipType::Healthcare => "Doctor-Patient Relationship".to_string(),
        RelationshipType::Legal => "Legal Representation".to_string(),
    }
}

/// Longer explanation of how the pair is connected.
pub fn context(kind: RelationshipType, source: &Profile, target: &Profile) -> String {
    match kind {
        RelationshipType::Family => {
            let surname = if source.last_name == target.last_name {
                " and surname"
            } else {
                ""
            };
            format!("Share family ties{}", surname)
        }
        RelationshipType::Colleague => format!("Work together in {} industry", source.industry),
        RelationshipType::Friend => format!(
            "Connected through mutual interests and {} community",
            source.city
        ),
        RelationshipType::Romantic => {
            let venue = if source.city == target.city { "local" } else { "online" };
            format!("Met through {} connections", venue)
        }
        RelationshipType::Neighbor => {
            format!("Live in the same neighborhood in {}", source.city)
        }
        RelationshipType::Business => format!("Professional network in {}", source.industry),
        RelationshipType::SocialMedia => "Connected on social media platforms".to_string(),
        RelationshipType::Education => "Met during education years".to_string(),
        RelationshipType::Healthcare => "Medical professional relationship".to_string(),
        RelationshipType::Legal => "Legal services and representation".to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn profile(id: i64, last_name: &str, age: u32) -> Profile {
        Profile {
            id,
            full_name: format!("Person{} {}", id, last_name),
            first_name: format!("Person{}", id),
            last_name: last_name.to_string(),
            age,
            city: format!("City{}", id),
            country: format!("Country{}", id),
            company: format!("Company{}", id),
            industry: format!("Industry{}", id),
            job_title: "Analyst".to_string(),
            marital_status: "Married".to_string(),
            sexual_orientation: "Heterosexual".to_string(),
            gender_identity: "Woman".to_string(),
            criminal_record: false,
            profile_type: None,
        }
    }

    #[test]
    fn test_shared_company_and_city() {
        let mut a = profile(1, "Hale", 30);
        let mut b = profile(2, "Ortiz", 32);
        a.city = "Austin".into();
        b.city = "Austin".into();
        a.company = "Acme".into();
        b.company = "Acme".into();

        let facts = PairFacts::new(&a, &b);
        assert!(facts.colleague_eligible());
        assert!(facts.neighbor_eligible());
        assert!(!facts.business_eligible());

        let kinds = eligible_types(&a, &b);
        assert!(kinds.contains(&RelationshipType::Colleague));
        assert!(kinds.contains(&RelationshipType::Neighbor));
        assert!(!kinds.contains(&RelationshipType::Family));
    }

    #[test]
    fn test_family_clauses_are_independent() {
        // Gap 45 is outside the age clause; the surname clause still applies.
        let child = profile(1, "Reyes", 10);
        let elder = profile(2, "Reyes", 55);
        let facts = PairFacts::new(&child, &elder);
        assert_eq!(facts.age_gap, 45);
        assert!(facts.family_eligible());

        let stranger = profile(3, "Novak", 55);
        assert!(!PairFacts::new(&child, &stranger).family_eligible());

        // Age clause alone, different surnames.
        let parent = profile(4, "Novak", 35);
        assert!(PairFacts::new(&child, &parent).family_eligible());
        let upper = profile(5, "Lund", 50);
        assert!(PairFacts::new(&child, &upper).family_eligible());
    }

    #[test]
    fn test_eligibility_is_pure() {
        let a = profile(1, "Kim", 24);
        let b = profile(2, "Kim", 26);
        assert_eq!(eligible_types(&a, &b), eligible_types(&a, &b));
        assert_eq!(eligible_types(&a, &b)[0], RelationshipType::Family);
    }

    #[test]
    fn test_business_requires_different_company() {
        let mut a = profile(1, "A", 40);
        let mut b = profile(2, "B", 41);
        a.industry = "Finance".into();
        b.industry = "Finance".into();
        assert!(PairFacts::new(&a, &b).business_eligible());

        b.company = a.company.clone();
        assert!(!PairFacts::new(&a, &b).business_eligible());
    }

    #[test]
    fn test_romantic_eligibility() {
        let mut a = profile(1, "A", 25);
        let mut b = profile(2, "B", 40);
        a.marital_status = "Single".into();
        b.marital_status = "Widowed".into();
        assert!(PairFacts::new(&a, &b).romantic_eligible());

        b.marital_status = "Married".into();
        assert!(!PairFacts::new(&a, &b).romantic_eligible());

        b.marital_status = "Divorced".into();
        a.age = 17;
        assert!(!PairFacts::new(&a, &b).romantic_eligible());

        a.age = 19;
        b.age = 40;
        assert!(!PairFacts::new(&a, &b).romantic_eligible());
    }

    #[test]
    fn test_healthcare_and_legal() {
        let mut a = profile(1, "A", 40);
        let mut b = profile(2, "B", 60);
        a.city = "Lyon".into();
        b.city = "Lyon".into();
        b.job_title = "Nurse Practitioner".into();
        assert!(PairFacts::new(&a, &b).healthcare_eligible());

        b.job_title = "Corporate Attorney".into();
        assert!(!PairFacts::new(&a, &b).healthcare_eligible());
        assert!(!PairFacts::new(&a, &b).legal_eligible());
        a.criminal_record = true;
        assert!(PairFacts::new(&a, &b).legal_eligible());
    }

    #[test]
    fn test_social_media_probability() {
        let mut a = profile(1, "A", 22);
        let mut b = profile(2, "B", 25);
        let young = PairFacts::new(&a, &b);
        assert!((social_media_probability(&young) - 0.9).abs() < 1e-9);

        a.age = 45;
        b.age = 60;
        let older = PairFacts::new(&a, &b);
        assert!((social_media_probability(&older) - 0.6).abs() < 1e-9);

        b.age = 49;
        b.city = a.city.clone();
        let mid = PairFacts::new(&a, &b);
        assert!((social_media_probability(&mid) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_strength_bases() {
        let a = profile(1, "Kim", 30);
        let mut b = profile(2, "Kim", 33);
        let facts = PairFacts::new(&a, &b);
        assert_eq!(strength_base(RelationshipType::Family, &facts), 0.95);
        assert_eq!(strength_base(RelationshipType::Neighbor, &facts), 0.4);
        assert_eq!(strength_base(RelationshipType::SocialMedia, &facts), 0.3);
        assert_eq!(strength_base(RelationshipType::Legal, &facts), 0.5);
        assert!((strength_base(RelationshipType::Friend, &facts) - 0.7).abs() < 1e-9);

        b.city = a.city.clone();
        let close = PairFacts::new(&a, &b);
        assert!((strength_base(RelationshipType::Friend, &close) - 0.8).abs() < 1e-9);
        assert_eq!(strength_base(RelationshipType::Colleague, &close), 0.7);
    }

    #[test]
    fn test_family_descriptions() {
        let a = profile(1, "Kim", 30);
        assert_eq!(describe(RelationshipType::Family, &a, &profile(2, "Kim", 55)), "Parent-Child");
        assert_eq!(describe(RelationshipType::Family, &a, &profile(2, "Kim", 38)), "Siblings");
        assert_eq!(
            describe(RelationshipType::Family, &a, &profile(2, "Kim", 45)),
            "Extended Family"
        );
        assert_eq!(
            describe(RelationshipType::Family, &a, &profile(2, "Lee", 48)),
            "Family Friend"
        );
    }

    #[test]
    fn test_templates_use_shared_attributes() {
        let mut a = profile(1, "A", 30);
        let mut b = profile(2, "B", 31);
        a.city = "Porto".into();
        b.city = "Porto".into();
        a.company = "Globex".into();
        a.industry = "Energy".into();

        assert_eq!(describe(RelationshipType::Friend, &a, &b), "Friends in Porto");
        assert_eq!(describe(RelationshipType::Neighbor, &a, &b), "Neighbors in Porto");
        assert_eq!(describe(RelationshipType::Colleague, &a, &b), "Energy Professional Network");
        assert_eq!(context(RelationshipType::Romantic, &a, &b), "Met through local connections");
        assert_eq!(context(RelationshipType::Family, &a, &b), "Share family ties");
        assert_eq!(
            context(RelationshipType::Business, &a, &b),
            "Professional network in Energy"
        );

        b.city = "Braga".into();
        assert_eq!(describe(RelationshipType::Friend, &a, &b), "Long-distance Friends");
        assert_eq!(context(RelationshipType::Romantic, &a, &b), "Met through online connections");
    }

    #[test]
    fn test_romantic_description() {
        let mut a = profile(1, "A", 30);
        let mut b = profile(2, "B", 31);
        a.marital_status = "Single".into();
        b.marital_status = "Single".into();
        assert_eq!(describe(RelationshipType::Romantic, &a, &b), "Dating");
        b.marital_status = "Divorced".into();
        assert_eq!(describe(RelationshipType::Romantic, &a, &b), "Romantic Connection");
    }
}
