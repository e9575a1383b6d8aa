use anyhow::Context;
use log::info;
use std::collections::HashMap;
use verdict::{extensions::OutcomeFutureExt, Failure, Outcome, Success};

#[derive(Debug, Failure)]
struct NotFound {
    message: String,
}

#[derive(Debug, Failure)]
struct Validation {
    message: String,
    field: &'static str,
}

/// Validation failure for a value that is present but malformed.
#[derive(Debug, Failure)]
struct Malformed {
    #[failure(base)]
    validation: Validation,
    value: String,
}

struct Users {
    emails: HashMap<u32, String>,
}

impl Users {
    fn email(&self, id: u32) -> Outcome<String> {
        match self.emails.get(&id) {
            Some(email) if email.is_empty() => Validation {
                message: format!("user {} has no email", id),
                field: "email",
            }
            .into(),
            Some(email) if !email.contains('@') => Malformed {
                validation: Validation {
                    message: format!("user {} has malformed email", id),
                    field: "email",
                },
                value: email.clone(),
            }
            .into(),
            Some(email) => Outcome::success(email.clone()),
            None => NotFound {
                message: format!("user {} not found", id),
            }
            .into(),
        }
    }

    async fn email_async(&self, id: u32) -> Outcome<String> {
        self.email(id)
    }
}

fn describe(outcome: &Outcome<String>) -> anyhow::Result<String> {
    outcome
        .switch()
        .case::<Success<String>>(|Success(email)| Ok(format!("send to {}", email)))
        .case::<Malformed>(|m| Ok(format!("fix {:?} ({})", m.value, m.message())))
        .case::<Validation>(|v| Ok(format!("ask for {} ({})", v.field, v.message)))
        .case::<NotFound>(|n| anyhow::bail!("{}", n.message))
        .default(|subject| Ok(format!("unexpected: success={}", subject.is_success())))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let users = Users {
        emails: HashMap::from([
            (1, "john@example.com".to_string()),
            (2, String::new()),
            (3, "doe.example.com".to_string()),
        ]),
    };

    for id in 1..=4 {
        let outcome = users.email_async(id).wait();
        match describe(&outcome) {
            Ok(action) => info!("user {}: {}", id, action),
            Err(e) => info!("user {}: skipped, {}", id, e),
        }
    }

    let first = users.email(1);
    let email = first.value().context("user 1 has an email")?;
    info!("first user email: {}", email);

    Ok(())
}
