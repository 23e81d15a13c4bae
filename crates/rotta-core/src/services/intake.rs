//! Check-in intake - the weekly entry point of the pipeline.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::copywriter::{CopyRequest, Copywriter};
use super::novelty::{Novelty, classify};
use super::{claim_slot, slots};
use crate::domain::{CheckIn, Pillar, Platform, Post, Slot, week_start};
use crate::error::DomainError;
use crate::ports::{AgencyRepository, CheckInRepository, Clock, PostRepository};

/// A check-in as submitted by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCheckIn {
    pub response_text: String,
    /// Platform the first post of the week is written for.
    #[serde(default)]
    pub platform: Platform,
    /// Pillar to steer the copy; the default pillar when absent.
    #[serde(default)]
    pub pillar: Option<Pillar>,
}

/// What happened to a submitted check-in.
#[derive(Debug, Clone)]
pub struct CheckInOutcome {
    pub check_in: CheckIn,
    pub week_start: NaiveDate,
    pub classification: Novelty,
    /// The generated post, present only for news.
    pub post: Option<Post>,
}

/// Records check-ins and runs the generation pipeline for news.
#[derive(Clone)]
pub struct CheckInIntake {
    agencies: Arc<dyn AgencyRepository>,
    check_ins: Arc<dyn CheckInRepository>,
    posts: Arc<dyn PostRepository>,
    copywriter: Copywriter,
    clock: Arc<dyn Clock>,
}

impl CheckInIntake {
    pub fn new(
        agencies: Arc<dyn AgencyRepository>,
        check_ins: Arc<dyn CheckInRepository>,
        posts: Arc<dyn PostRepository>,
        copywriter: Copywriter,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            agencies,
            check_ins,
            posts,
            copywriter,
            clock,
        }
    }

    /// Submit this week's check-in.
    ///
    /// The check-in is stored first. `NoNews` stops there; `News` generates
    /// copy for the requested platform and files a `ready` post on the week's
    /// Monday. Generation or slot failures leave no post behind.
    pub async fn submit(
        &self,
        agency_id: Uuid,
        request: SubmitCheckIn,
    ) -> Result<CheckInOutcome, DomainError> {
        let agency = self
            .agencies
            .find_by_id(agency_id)
            .await?
            .ok_or_else(|| DomainError::agency_not_found(agency_id))?;

        let week_start = week_start(self.clock.today());
        let check_in = self
            .check_ins
            .insert(CheckIn::new(agency_id, week_start, &request.response_text))
            .await?;

        let classification = classify(&request.response_text);
        tracing::info!(
            agency_id = %agency_id,
            week_start = %week_start,
            ?classification,
            "Check-in recorded"
        );

        if !classification.is_news() {
            return Ok(CheckInOutcome {
                check_in,
                week_start,
                classification,
                post: None,
            });
        }

        let platform = request.platform;
        let existing = self.posts.find_by_agency(agency_id).await?;
        if !slots::is_available(&existing, week_start, platform) {
            return Err(DomainError::SlotTaken(Slot {
                scheduled_date: week_start,
                platform,
            }));
        }

        let pillar = request.pillar.unwrap_or_default();
        let copy_text = self
            .copywriter
            .generate(&CopyRequest {
                seed_text: Some(request.response_text),
                agency_name: agency.name.clone(),
                agency_city: agency.city.clone(),
                pillar: agency.pillar_brief(&pillar),
                platform,
            })
            .await?;

        let post = claim_slot(
            self.posts.as_ref(),
            Post::new(agency_id, pillar, platform, week_start, copy_text),
        )
        .await?;

        tracing::info!(
            agency_id = %agency_id,
            post_id = %post.id,
            platform = %post.platform,
            "Post generated from check-in"
        );

        Ok(CheckInOutcome {
            check_in,
            week_start,
            classification,
            post: Some(post),
        })
    }

    /// Every check-in of the agency, newest first.
    pub async fn history(&self, agency_id: Uuid) -> Result<Vec<CheckIn>, DomainError> {
        Ok(self.check_ins.find_by_agency(agency_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Agency, AgencyPillars, PostStatus};
    use crate::ports::GenerationError;
    use crate::services::testing::{
        FakeStore, FixedClock, ScriptedGenerator, monday, monday_morning,
    };
    use chrono::{Duration, TimeZone, Utc};

    struct Fixture {
        store: Arc<FakeStore>,
        generator: Arc<ScriptedGenerator>,
        intake: CheckInIntake,
        agency_id: Uuid,
    }

    fn fixture_at(generator: ScriptedGenerator, now: chrono::DateTime<Utc>) -> Fixture {
        let agency = Agency::new("Immobiliare Rossi", "Milano", "").unwrap();
        let agency_id = agency.id;
        let store = Arc::new(FakeStore::with_agency(agency));
        let generator = Arc::new(generator);
        let intake = CheckInIntake::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Copywriter::new(generator.clone()),
            Arc::new(FixedClock(now)),
        );
        Fixture {
            store,
            generator,
            intake,
            agency_id,
        }
    }

    fn fixture(generator: ScriptedGenerator) -> Fixture {
        fixture_at(generator, monday_morning())
    }

    fn news(text: &str) -> SubmitCheckIn {
        SubmitCheckIn {
            response_text: text.to_string(),
            platform: Platform::Facebook,
            pillar: Some(Pillar::ChiSiamo),
        }
    }

    #[tokio::test]
    async fn test_news_creates_one_ready_post_on_monday() {
        let f = fixture(ScriptedGenerator::replying(
            "Sara ha chiuso la sua prima vendita: benvenuta nel mondo Rossi.",
        ));

        let outcome = f
            .intake
            .submit(f.agency_id, news("Sara ha chiuso la sua prima vendita."))
            .await
            .unwrap();

        assert_eq!(outcome.classification, Novelty::News);
        assert_eq!(outcome.week_start, monday());
        assert_eq!(f.generator.requests().len(), 1);

        let posts = f.store.posts();
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.status, PostStatus::Ready);
        assert_eq!(post.platform, Platform::Facebook);
        assert_eq!(post.scheduled_date, monday());
        assert_eq!(post.pillar, Pillar::ChiSiamo);
        assert_eq!(outcome.post.as_ref().map(|p| p.id), Some(post.id));
    }

    #[tokio::test]
    async fn test_no_news_creates_no_post() {
        let f = fixture(ScriptedGenerator::replying("unused"));

        let outcome = f.intake.submit(f.agency_id, news("niente")).await.unwrap();

        assert_eq!(outcome.classification, Novelty::NoNews);
        assert!(outcome.post.is_none());
        assert!(f.store.posts().is_empty());
        assert!(f.generator.requests().is_empty());
        assert_eq!(f.store.check_ins().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_answer_stored_as_absent() {
        let f = fixture(ScriptedGenerator::replying("unused"));
        f.intake.submit(f.agency_id, news("   ")).await.unwrap();

        let check_ins = f.store.check_ins();
        assert_eq!(check_ins[0].response_text, None);
        assert_eq!(check_ins[0].week_start, monday());
    }

    #[tokio::test]
    async fn test_sunday_submission_files_under_current_monday() {
        let sunday_evening = Utc.with_ymd_and_hms(2026, 10, 25, 20, 0, 0).unwrap();
        let f = fixture_at(ScriptedGenerator::replying("Copy."), sunday_evening);

        let outcome = f
            .intake
            .submit(f.agency_id, news("Nuovo mandato in Brera."))
            .await
            .unwrap();

        assert_eq!(outcome.week_start, monday());
        assert_eq!(outcome.post.unwrap().scheduled_date, monday());
    }

    #[tokio::test]
    async fn test_generation_failure_leaves_no_post() {
        let f = fixture(ScriptedGenerator::failing());

        let err = f
            .intake
            .submit(f.agency_id, news("Abbiamo un nuovo collega."))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Generation(GenerationError::Upstream(_))
        ));
        assert!(f.store.posts().is_empty());
        assert_eq!(f.store.check_ins().len(), 1);
    }

    #[tokio::test]
    async fn test_second_news_same_platform_same_week_is_slot_taken() {
        let f = fixture(ScriptedGenerator::replying("Copy."));
        f.intake
            .submit(f.agency_id, news("Prima notizia."))
            .await
            .unwrap();

        let err = f
            .intake
            .submit(f.agency_id, news("Seconda notizia."))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::SlotTaken(slot) if slot.platform == Platform::Facebook));
        assert_eq!(f.store.posts().len(), 1);
        // The snapshot check short-circuits before a second generation call.
        assert_eq!(f.generator.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_configured_pillars_steer_prompt() {
        let mut agency = Agency::new("Immobiliare Rossi", "Milano", "").unwrap();
        agency.set_pillars(AgencyPillars::new("Tre generazioni", "Vendite", "Brera").unwrap());
        let agency_id = agency.id;
        let store = Arc::new(FakeStore::with_agency(agency));
        let generator = Arc::new(ScriptedGenerator::replying("Copy."));
        let intake = CheckInIntake::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Copywriter::new(generator.clone()),
            Arc::new(FixedClock(monday_morning() + Duration::days(2))),
        );

        let request = SubmitCheckIn {
            response_text: "Festa in agenzia.".to_string(),
            platform: Platform::Instagram,
            pillar: None,
        };
        let outcome = intake.submit(agency_id, request).await.unwrap();

        let prompt = &generator.requests()[0].prompt;
        assert!(prompt.contains("Pillar: chi_siamo: Tre generazioni"));
        assert_eq!(outcome.post.unwrap().pillar, Pillar::ChiSiamo);
    }

    #[tokio::test]
    async fn test_every_submission_is_kept_in_history() {
        let f = fixture(ScriptedGenerator::replying("Copy."));
        f.intake.submit(f.agency_id, news("niente")).await.unwrap();
        f.intake
            .submit(f.agency_id, news("Nuovo mandato."))
            .await
            .unwrap();

        let history = f.intake.history(f.agency_id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|c| c.week_start == monday()));
    }

    #[tokio::test]
    async fn test_unknown_agency_is_not_found() {
        let f = fixture(ScriptedGenerator::replying("Copy."));
        let err = f
            .intake
            .submit(Uuid::new_v4(), news("Notizia."))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(f.store.check_ins().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_generation_leaves_no_post() {
        let f = fixture(ScriptedGenerator::slow(
            std::time::Duration::from_secs(5),
            "Copy.",
        ));

        let result = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            f.intake.submit(f.agency_id, news("Notizia lenta.")),
        )
        .await;

        assert!(result.is_err());
        assert!(f.store.posts().is_empty());
    }
}
