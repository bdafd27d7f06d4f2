use crate::date::Date;
use crate::fee::Fee;
use crate::location::Location;
use derive_getters::Getters;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

const ADULT_AGE: i32 = 18;
const STANDARD_MONTHLY_FEE: Fee = Fee::from_cents(3999);
const FAMILY_MONTHLY_FEE: Fee = Fee::from_cents(5999);
const STARTING_FEE: Fee = Fee::from_cents(2999);
const MONTHS_QUARTER: u32 = 3;
const MONTHS_YEAR: u32 = 12;
const MONTHS_WAIVED: u32 = 1;
const FAMILY_PASSES: u32 = 1;
const PREMIUM_PASSES: u32 = 3;

/// The kind of membership, which decides billing, term length and guest privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipTier {
    Standard,
    Family,
    Premium,
}

impl MembershipTier {
    fn monthly_fee(&self) -> Fee {
        match self {
            MembershipTier::Standard => STANDARD_MONTHLY_FEE,
            MembershipTier::Family | MembershipTier::Premium => FAMILY_MONTHLY_FEE,
        }
    }

    fn billed_months(&self) -> u32 {
        match self {
            MembershipTier::Standard | MembershipTier::Family => MONTHS_QUARTER,
            MembershipTier::Premium => MONTHS_YEAR - MONTHS_WAIVED,
        }
    }

    fn charges_starting_fee(&self) -> bool {
        !matches!(self, MembershipTier::Premium)
    }

    /// Number of months a new membership of this tier lasts.
    pub fn term_months(&self) -> u32 {
        match self {
            MembershipTier::Standard | MembershipTier::Family => MONTHS_QUARTER,
            MembershipTier::Premium => MONTHS_YEAR,
        }
    }

    /// Guest passes granted on creation, or [None] when the tier can't bring guests.
    pub fn starting_guest_passes(&self) -> Option<u32> {
        match self {
            MembershipTier::Standard => None,
            MembershipTier::Family => Some(FAMILY_PASSES),
            MembershipTier::Premium => Some(PREMIUM_PASSES),
        }
    }

    /// Whether members of this tier may attend classes at any location.
    pub fn allows_any_location(&self) -> bool {
        !matches!(self, MembershipTier::Standard)
    }

    /// Fee due for the next billing period.
    /// The one-time starting fee is added to the first bill, except for [MembershipTier::Premium].
    pub fn membership_fee(&self, is_first_bill: bool) -> Fee {
        let fee = self.monthly_fee() * self.billed_months();
        if is_first_bill && self.charges_starting_fee() {
            fee + STARTING_FEE
        } else {
            fee
        }
    }

    fn label(&self) -> Option<&'static str> {
        match self {
            MembershipTier::Standard => None,
            MembershipTier::Family => Some("Family"),
            MembershipTier::Premium => Some("Premium"),
        }
    }
}

/// Remaining guest passes of a membership.
/// Using a pass never goes below zero. Returning one is never capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestPasses {
    remaining: u32,
}

impl GuestPasses {
    pub fn new(remaining: u32) -> Self {
        Self { remaining }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn has_pass(&self) -> bool {
        self.remaining > 0
    }

    pub fn use_pass(&mut self) {
        if self.has_pass() {
            self.remaining -= 1;
        }
    }

    pub fn return_pass(&mut self) {
        self.remaining += 1;
    }
}

/// What makes a member unique: names (case-insensitive) and date of birth.
#[derive(Debug, Clone, Eq, Getters)]
pub struct MemberIdentity {
    first_name: String,
    last_name: String,
    date_of_birth: Date,
}

impl MemberIdentity {
    pub fn new(first_name: String, last_name: String, date_of_birth: Date) -> Self {
        Self {
            first_name,
            last_name,
            date_of_birth,
        }
    }

    /// Alphabetical order on last name, then first name, ignoring case.
    pub fn compare_names(&self, other: &Self) -> Ordering {
        self.last_name
            .to_uppercase()
            .cmp(&other.last_name.to_uppercase())
            .then_with(|| {
                self.first_name
                    .to_uppercase()
                    .cmp(&other.first_name.to_uppercase())
            })
    }
}

impl PartialEq for MemberIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.first_name.to_uppercase() == other.first_name.to_uppercase()
            && self.last_name.to_uppercase() == other.last_name.to_uppercase()
            && self.date_of_birth == other.date_of_birth
    }
}

impl Display for MemberIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A member of the fitness chain and the state of their membership.
///
/// Two memberships are equal when their [MemberIdentity] is.
/// Guest passes only exist for tiers that allow guests:
/// use [Membership::guest_passes_mut] to find out whether a member can bring one.
#[derive(Debug, Clone, Getters)]
pub struct Membership {
    identity: MemberIdentity,
    expiration_date: Date,
    location: Location,
    tier: MembershipTier,
    #[getter(skip)]
    guest_passes: Option<GuestPasses>,
}

impl Membership {
    /// A new membership starting on `today`, expiring after the tier's term.
    pub fn new(
        tier: MembershipTier,
        identity: MemberIdentity,
        location: Location,
        today: &Date,
    ) -> Self {
        Self {
            identity,
            expiration_date: today.plus_months(tier.term_months()),
            location,
            tier,
            guest_passes: tier.starting_guest_passes().map(GuestPasses::new),
        }
    }

    /// A standard membership whose expiration date is already known.
    pub fn with_expiration(identity: MemberIdentity, expiration_date: Date, location: Location) -> Self {
        Self {
            identity,
            expiration_date,
            location,
            tier: MembershipTier::Standard,
            guest_passes: None,
        }
    }

    pub fn first_name(&self) -> &str {
        self.identity.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.identity.last_name()
    }

    pub fn date_of_birth(&self) -> &Date {
        self.identity.date_of_birth()
    }

    pub fn set_expiration_date(&mut self, expiration_date: Date) {
        self.expiration_date = expiration_date;
    }

    pub fn guest_passes(&self) -> Option<&GuestPasses> {
        self.guest_passes.as_ref()
    }

    pub fn guest_passes_mut(&mut self) -> Option<&mut GuestPasses> {
        self.guest_passes.as_mut()
    }

    pub fn matches(&self, identity: &MemberIdentity) -> bool {
        self.identity == *identity
    }

    pub fn membership_fee(&self, is_first_bill: bool) -> Fee {
        self.tier.membership_fee(is_first_bill)
    }

    /// Whether the member was born strictly before `today`.
    pub fn is_valid_dob(&self, today: &Date) -> bool {
        self.date_of_birth() < today
    }

    /// Whether the member is at least 18 years old on `today`.
    pub fn is_adult(&self, today: &Date) -> bool {
        let date_of_birth = self.date_of_birth();
        let years = today.year() - date_of_birth.year();
        if years != ADULT_AGE {
            return years > ADULT_AGE;
        }
        let months = today.month() - date_of_birth.month();
        if months != 0 {
            return months > 0;
        }
        today.day() >= date_of_birth.day()
    }

    /// A membership is expired on its expiration date.
    pub fn is_expired(&self, today: &Date) -> bool {
        self.expiration_date <= *today
    }

    pub fn compare_names(&self, other: &Self) -> Ordering {
        self.identity.compare_names(&other.identity)
    }

    /// Render the membership as seen on `today`.
    pub fn display<'a>(&'a self, today: &'a Date) -> MembershipDisplay<'a> {
        MembershipDisplay {
            membership: self,
            today,
        }
    }
}

impl PartialEq for Membership {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Membership {}

pub struct MembershipDisplay<'a> {
    membership: &'a Membership,
    today: &'a Date,
}

impl Display for MembershipDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let membership = self.membership;
        let tense = if membership.is_expired(self.today) {
            "expired"
        } else {
            "expires"
        };
        write!(
            f,
            "{}, DOB: {}, Membership {tense}: {}, Location: {}",
            membership.identity,
            membership.date_of_birth(),
            membership.expiration_date,
            membership.location
        )?;
        if let (Some(label), Some(passes)) = (membership.tier.label(), membership.guest_passes()) {
            write!(f, " ({label}) Guest-pass remaining: {}", passes.remaining())?;
        }

        Ok(())
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub const FIRST_NAME: &str = "John";
    pub const LAST_NAME: &str = "Doe";

    /// The date every test considers to be today.
    pub fn reference_date() -> Date {
        Date::new(2024, 11, 15)
    }

    pub fn identity(first_name: &str, last_name: &str, date_of_birth: Date) -> MemberIdentity {
        MemberIdentity::new(first_name.to_owned(), last_name.to_owned(), date_of_birth)
    }

    pub fn john_doe() -> MemberIdentity {
        identity(FIRST_NAME, LAST_NAME, Date::new(1990, 1, 1))
    }

    impl Membership {
        pub fn new_test(tier: MembershipTier, identity: MemberIdentity, location: Location) -> Self {
            Membership::new(tier, identity, location, &reference_date())
        }
    }

    #[test]
    fn standard_membership_scenario() {
        let membership = Membership::new_test(MembershipTier::Standard, john_doe(), Location::Edison);

        assert_eq!(&Date::new(2025, 2, 15), membership.expiration_date());
        assert_eq!("149.96", membership.membership_fee(true).to_string());
        assert_eq!("119.97", membership.membership_fee(false).to_string());
        assert!(membership.guest_passes().is_none());
    }

    #[test]
    fn family_membership_scenario() {
        let membership = Membership::new_test(MembershipTier::Family, john_doe(), Location::Edison);

        assert_eq!(&Date::new(2025, 2, 15), membership.expiration_date());
        assert_eq!(Fee::from_cents(20996), membership.membership_fee(true));
        assert_eq!(Fee::from_cents(17997), membership.membership_fee(false));
        assert_eq!(Some(&GuestPasses::new(1)), membership.guest_passes());
    }

    #[test]
    fn premium_membership_scenario() {
        let membership = Membership::new_test(MembershipTier::Premium, john_doe(), Location::Edison);

        assert_eq!(&Date::new(2025, 11, 15), membership.expiration_date());
        assert_eq!(Some(&GuestPasses::new(3)), membership.guest_passes());
        assert_eq!("659.89", membership.membership_fee(true).to_string());
        assert_eq!("659.89", membership.membership_fee(false).to_string());
    }

    #[test]
    fn loaded_membership_is_standard() {
        let membership = Membership::with_expiration(john_doe(), Date::new(2023, 3, 31), Location::Franklin);

        assert_eq!(&MembershipTier::Standard, membership.tier());
        assert_eq!(&Date::new(2023, 3, 31), membership.expiration_date());
    }

    mod guest_passes {
        use crate::membership::GuestPasses;

        #[test]
        fn should_not_go_below_zero() {
            let mut passes = GuestPasses::new(1);
            passes.use_pass();
            assert!(!passes.has_pass());
            passes.use_pass();
            assert_eq!(0, passes.remaining());
        }

        #[test]
        fn should_return_passes_without_cap() {
            let mut passes = GuestPasses::new(1);
            passes.return_pass();
            passes.return_pass();
            assert_eq!(3, passes.remaining());
        }
    }

    #[parameterized(
        date_of_birth = {(2006, 11, 15), (2006, 11, 16), (2006, 10, 30), (2006, 12, 1), (2005, 12, 31), (2007, 1, 1)},
        expected_result = {true, false, true, false, true, false}
    )]
    fn should_check_adulthood(date_of_birth: (i32, i32, i32), expected_result: bool) {
        let (year, month, day) = date_of_birth;
        let membership = Membership::new_test(
            MembershipTier::Standard,
            identity(FIRST_NAME, LAST_NAME, Date::new(year, month, day)),
            Location::Edison,
        );
        assert_eq!(expected_result, membership.is_adult(&reference_date()));
    }

    #[parameterized(
        date_of_birth = {(2024, 11, 14), (2024, 11, 15), (2024, 11, 16)},
        expected_result = {true, false, false}
    )]
    fn should_check_date_of_birth(date_of_birth: (i32, i32, i32), expected_result: bool) {
        let (year, month, day) = date_of_birth;
        let membership = Membership::new_test(
            MembershipTier::Standard,
            identity(FIRST_NAME, LAST_NAME, Date::new(year, month, day)),
            Location::Edison,
        );
        assert_eq!(expected_result, membership.is_valid_dob(&reference_date()));
    }

    #[parameterized(
        expiration_date = {(2024, 11, 14), (2024, 11, 15), (2024, 11, 16)},
        expected_result = {true, true, false}
    )]
    fn should_check_expiration(expiration_date: (i32, i32, i32), expected_result: bool) {
        let (year, month, day) = expiration_date;
        let membership =
            Membership::with_expiration(john_doe(), Date::new(year, month, day), Location::Edison);
        assert_eq!(expected_result, membership.is_expired(&reference_date()));
    }

    #[test]
    fn identity_ignores_name_case() {
        let membership = Membership::new_test(MembershipTier::Family, john_doe(), Location::Edison);
        let other = Membership::with_expiration(
            identity("JOHN", "doe", Date::new(1990, 1, 1)),
            Date::new(2020, 1, 1),
            Location::Somerville,
        );

        assert_eq!(membership, other);
        assert!(membership.matches(&identity("john", "DOE", Date::new(1990, 1, 1))));
        assert!(!membership.matches(&identity("John", "Doe", Date::new(1990, 1, 2))));
    }

    #[test]
    fn should_compare_last_name_then_first_name() {
        let date_of_birth = Date::new(1990, 1, 1);
        let jane_doe = identity("Jane", "Doe", date_of_birth);
        let john_doe = identity("john", "DOE", date_of_birth);
        let adam_smith = identity("Adam", "Smith", date_of_birth);

        assert_eq!(Ordering::Less, jane_doe.compare_names(&john_doe));
        assert_eq!(Ordering::Less, john_doe.compare_names(&adam_smith));
        assert_eq!(Ordering::Equal, john_doe.compare_names(&identity("JOHN", "doe", date_of_birth)));
    }

    #[test]
    fn should_display_membership() {
        let today = reference_date();
        let standard = Membership::new_test(MembershipTier::Standard, john_doe(), Location::Edison);
        assert_eq!(
            "John Doe, DOB: 1/1/1990, Membership expires: 2/15/2025, Location: EDISON, 08837, MIDDLESEX",
            standard.display(&today).to_string()
        );

        let premium = Membership::new_test(MembershipTier::Premium, john_doe(), Location::Franklin);
        assert_eq!(
            "John Doe, DOB: 1/1/1990, Membership expires: 11/15/2025, Location: FRANKLIN, 08873, SOMERSET (Premium) Guest-pass remaining: 3",
            premium.display(&today).to_string()
        );

        let expired = Membership::with_expiration(john_doe(), Date::new(2024, 1, 1), Location::Edison);
        assert!(expired.display(&today).to_string().contains("Membership expired: 1/1/2024"));
    }
}
