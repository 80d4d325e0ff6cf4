use super::*;
use crate::fixture::review;

#[test]
fn ratings_favor_satisfied_customers() {
    let mut rng = rng();

    let ratings: Vec<i32> = (0..1_000).map(|_| review::star_rating(&mut rng)).collect();
    let positive = ratings.iter().filter(|r| **r >= 4).count();

    assert!(ratings.iter().all(|r| (1..=5).contains(r)));
    assert!((700..=900).contains(&positive));
}

#[test]
fn recommendations_follow_rating() {
    let operators = ids("OP", 2);
    let mut rng = rng();

    for index in 0..50 {
        let row = review::operator_review(index, &mut rng, &operators);

        assert_eq!(value(row.would_recommend), value(row.rating) >= 4);
    }
}

#[test]
fn sub_ratings_stay_in_range() {
    let aircraft = aircraft_refs();
    let mut rng = rng();

    for index in 0..50 {
        let row = review::aircraft_review(index, &mut rng, &aircraft);
        let rating = value(row.rating);
        let comfort = value(row.comfort_rating).expect("comfort rating");

        assert!((1..=5).contains(&comfort));
        assert!((comfort - rating).abs() <= 1);
    }
}
