//! Per-country media content rating limits for iOS devices.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model;

/// Highest app store age rating a device may install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingAppsType {
    AllAllowed,
    AllBlocked,
    AgesAbove4,
    AgesAbove9,
    AgesAbove12,
    AgesAbove17,
}

#[model]
pub struct MediaContentRatingAustralia {
    pub movie_rating: Option<RatingAustraliaMoviesType>,
    pub tv_rating: Option<RatingAustraliaTelevisionType>,
}

#[model]
pub struct MediaContentRatingCanada {
    pub movie_rating: Option<RatingCanadaMoviesType>,
    pub tv_rating: Option<RatingCanadaTelevisionType>,
}

#[model]
pub struct MediaContentRatingFrance {
    pub movie_rating: Option<RatingFranceMoviesType>,
    pub tv_rating: Option<RatingFranceTelevisionType>,
}

#[model]
pub struct MediaContentRatingGermany {
    pub movie_rating: Option<RatingGermanyMoviesType>,
    pub tv_rating: Option<RatingGermanyTelevisionType>,
}

#[model]
pub struct MediaContentRatingIreland {
    pub movie_rating: Option<RatingIrelandMoviesType>,
    pub tv_rating: Option<RatingIrelandTelevisionType>,
}

#[model]
pub struct MediaContentRatingJapan {
    pub movie_rating: Option<RatingJapanMoviesType>,
    pub tv_rating: Option<RatingJapanTelevisionType>,
}

#[model]
pub struct MediaContentRatingNewZealand {
    pub movie_rating: Option<RatingNewZealandMoviesType>,
    pub tv_rating: Option<RatingNewZealandTelevisionType>,
}

#[model]
pub struct MediaContentRatingUnitedKingdom {
    pub movie_rating: Option<RatingUnitedKingdomMoviesType>,
    pub tv_rating: Option<RatingUnitedKingdomTelevisionType>,
}

#[model]
pub struct MediaContentRatingUnitedStates {
    pub movie_rating: Option<RatingUnitedStatesMoviesType>,
    pub tv_rating: Option<RatingUnitedStatesTelevisionType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingAustraliaMoviesType {
    AllAllowed,
    AllBlocked,
    General,
    ParentalGuidance,
    Mature,
    AgesAbove15,
    AgesAbove18,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingAustraliaTelevisionType {
    AllAllowed,
    AllBlocked,
    Preschoolers,
    Children,
    General,
    ParentalGuidance,
    Mature,
    AgesAbove15,
    AgesAbove15AdultViolence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingCanadaMoviesType {
    AllAllowed,
    AllBlocked,
    General,
    ParentalGuidance,
    AgesAbove14,
    AgesAbove18,
    Restricted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingCanadaTelevisionType {
    AllAllowed,
    AllBlocked,
    Children,
    ChildrenAbove8,
    General,
    ParentalGuidance,
    AgesAbove14,
    AgesAbove18,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingFranceMoviesType {
    AllAllowed,
    AllBlocked,
    AgesAbove10,
    AgesAbove12,
    AgesAbove16,
    AgesAbove18,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingFranceTelevisionType {
    AllAllowed,
    AllBlocked,
    AgesAbove10,
    AgesAbove12,
    AgesAbove16,
    AgesAbove18,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingGermanyMoviesType {
    AllAllowed,
    AllBlocked,
    General,
    AgesAbove6,
    AgesAbove12,
    AgesAbove16,
    Adults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingGermanyTelevisionType {
    AllAllowed,
    AllBlocked,
    General,
    AgesAbove6,
    AgesAbove12,
    AgesAbove16,
    Adults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingIrelandMoviesType {
    AllAllowed,
    AllBlocked,
    General,
    ParentalGuidance,
    AgesAbove12,
    AgesAbove15,
    AgesAbove16,
    Adults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingIrelandTelevisionType {
    AllAllowed,
    AllBlocked,
    General,
    Children,
    YoungAdults,
    ParentalSupervision,
    Mature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingJapanMoviesType {
    AllAllowed,
    AllBlocked,
    General,
    ParentalGuidance,
    AgesAbove15,
    AgesAbove18,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingJapanTelevisionType {
    AllAllowed,
    AllBlocked,
    ExplicitAllowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingNewZealandMoviesType {
    AllAllowed,
    AllBlocked,
    General,
    ParentalGuidance,
    Mature,
    AgesAbove13,
    AgesAbove15,
    AgesAbove16,
    AgesAbove18,
    Restricted,
    AgesAbove16Restricted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingNewZealandTelevisionType {
    AllAllowed,
    AllBlocked,
    General,
    ParentalGuidance,
    Adults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingUnitedKingdomMoviesType {
    AllAllowed,
    AllBlocked,
    General,
    UniversalChildren,
    ParentalGuidance,
    AgesAbove12Video,
    AgesAbove12Cinema,
    AgesAbove15,
    Adults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingUnitedKingdomTelevisionType {
    AllAllowed,
    AllBlocked,
    Caution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingUnitedStatesMoviesType {
    AllAllowed,
    AllBlocked,
    General,
    ParentalGuidance,
    ParentalGuidance13,
    Restricted,
    Adults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingUnitedStatesTelevisionType {
    AllAllowed,
    AllBlocked,
    ChildrenAll,
    ChildrenAbove7,
    General,
    ParentalGuidance,
    ChildrenAbove14,
    Adults,
}
