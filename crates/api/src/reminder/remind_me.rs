use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use adjutant_api_structs::remind_me::*;
use adjutant_domain::{parse_duration, Job, JobAction, JobTrigger};
use adjutant_infra::Context;
use adjutant_utils::create_random_secret;

/// One-shot reminders only survive a short restart gap; a reminder that
/// is hours late is worse than none.
const ONE_SHOT_MISFIRE_GRACE_MILLIS: i64 = 60 * 1000;

pub async fn remind_me_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    let body = body.0;
    let usecase = RemindMeUseCase {
        user_id: body.user_id,
        delay: body.delay,
        message: body.message,
    };

    execute(usecase, &ctx)
        .await
        .map(|scheduled_at| HttpResponse::Ok().json(APIResponse { scheduled_at }))
        .map_err(ApiError::from)
}

/// Registers a deferred one-shot delivery of `message` after the given
/// delay. Ids are freshly generated, so reminders never replace each
/// other.
#[derive(Debug)]
pub struct RemindMeUseCase {
    pub user_id: i64,
    pub delay: String,
    pub message: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidDelay(String),
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidDelay(delay) => Self::BadClientData(format!(
                "Invalid delay: `{}`. Use expressions like 30s, 10m, 2h or 1d.",
                delay
            )),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for RemindMeUseCase {
    type Response = i64;

    type Error = UseCaseError;

    const NAME: &'static str = "RemindMe";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let delay = parse_duration(&self.delay)
            .map_err(|_| UseCaseError::InvalidDelay(self.delay.clone()))?;

        let run_at = ctx.sys.get_timestamp_millis() + delay.num_milliseconds();
        ctx.scheduler.add_job(Job {
            id: format!("reminder_{}_{}", self.user_id, create_random_secret(8)),
            trigger: JobTrigger::At(run_at),
            action: JobAction::OneShotReminder {
                user_id: self.user_id,
                message: self.message.clone(),
            },
            misfire_grace_millis: ONE_SHOT_MISFIRE_GRACE_MILLIS,
            replace_existing: false,
        });

        Ok(run_at)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use adjutant_infra::{setup_context_inmemory, FakeSys};
    use std::sync::Arc;

    const NOW: i64 = 1613862000000;

    #[tokio::test]
    async fn schedules_at_now_plus_delay() {
        let (mut ctx, _job_rx) = setup_context_inmemory();
        ctx.sys = Arc::new(FakeSys::new(NOW));

        let cases = [
            ("30s", 30 * 1000),
            ("10m", 600 * 1000),
            ("2h", 7200 * 1000),
            ("1d", 86400 * 1000),
        ];
        for (delay, millis) in cases {
            let usecase = RemindMeUseCase {
                user_id: 42,
                delay: delay.into(),
                message: "drink water".into(),
            };
            let scheduled_at = execute(usecase, &ctx).await.unwrap();
            assert_eq!(scheduled_at, NOW + millis);
        }
    }

    #[tokio::test]
    async fn malformed_delays_are_rejected() {
        let (ctx, _job_rx) = setup_context_inmemory();

        for delay in ["10", "m10", "-5m", ""] {
            let usecase = RemindMeUseCase {
                user_id: 42,
                delay: delay.into(),
                message: "drink water".into(),
            };
            let res = execute(usecase, &ctx).await;
            assert_eq!(res.unwrap_err(), UseCaseError::InvalidDelay(delay.into()));
        }
    }
}
