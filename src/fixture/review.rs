//! Operator and aircraft review rows.

use entity::{aircraft_review, operator_review};
use rand::Rng;
use sea_orm::ActiveValue;

use crate::fixture::{
    catalog::{self, pick},
    ident,
    pool::{AircraftRef, Parents},
};

/// Share of reviews rated 4 or 5 stars.
const POSITIVE_SHARE: f64 = 0.8;

/// A 1-5 star rating skewed towards satisfied customers.
pub fn star_rating(rng: &mut impl Rng) -> i32 {
    if rng.random_bool(POSITIVE_SHARE) {
        rng.random_range(4..=5)
    } else {
        rng.random_range(1..=3)
    }
}

fn review_text(rng: &mut impl Rng, rating: i32) -> (&'static str, &'static str) {
    if rating >= 4 {
        *pick(rng, catalog::POSITIVE_REVIEWS)
    } else {
        *pick(rng, catalog::NEGATIVE_REVIEWS)
    }
}

/// A sub-rating within one star of the overall rating.
fn sub_rating(rng: &mut impl Rng, rating: i32) -> i32 {
    (rating + rng.random_range(-1..=1)).clamp(1, 5)
}

/// A review of one of `operators`.
pub fn operator_review(
    _index: usize,
    rng: &mut impl Rng,
    operators: &Parents<String>,
) -> operator_review::ActiveModel {
    let now = catalog::now();
    let rating = star_rating(rng);
    let (title, comment) = review_text(rng, rating);

    operator_review::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        operator_id: ActiveValue::Set(operators.pick(rng).clone()),
        reviewer_name: ActiveValue::Set(catalog::person_name(rng)),
        rating: ActiveValue::Set(rating),
        title: ActiveValue::Set(title.to_string()),
        comment: ActiveValue::Set(Some(comment.to_string())),
        would_recommend: ActiveValue::Set(rating >= 4),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

/// A review of one of `aircraft`.
pub fn aircraft_review(
    _index: usize,
    rng: &mut impl Rng,
    aircraft: &Parents<AircraftRef>,
) -> aircraft_review::ActiveModel {
    let now = catalog::now();
    let rating = star_rating(rng);
    let (_, comment) = review_text(rng, rating);
    let comfort_rating = sub_rating(rng, rating);
    let cleanliness_rating = sub_rating(rng, rating);

    aircraft_review::ActiveModel {
        id: ActiveValue::Set(ident::uuid(rng)),
        aircraft_id: ActiveValue::Set(aircraft.pick(rng).id.clone()),
        reviewer_name: ActiveValue::Set(catalog::person_name(rng)),
        rating: ActiveValue::Set(rating),
        comfort_rating: ActiveValue::Set(Some(comfort_rating)),
        cleanliness_rating: ActiveValue::Set(Some(cleanliness_rating)),
        comment: ActiveValue::Set(Some(comment.to_string())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}
