//! Login flow demonstration
//!
//! Composes the credential gate, user lookup, token issue, login, and
//! redirect steps into one pipeline, then runs it with valid and with
//! empty credentials. Run with: cargo run --example login

use anyhow::{Context, Result};
use compose::{trust, Pipeline, StepError};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: String,
}

#[derive(Debug, Clone)]
struct Account {
    status: String,
    id: String,
}

#[derive(Debug, Clone)]
struct Session {
    status: String,
    id: String,
    name: String,
    token: String,
}

#[derive(Debug, Clone)]
struct LoginFeedback {
    redirect_url: String,
}

#[derive(Debug, Clone)]
struct Outcome {
    code: String,
}

fn check_user_input(creds: Credentials) -> Result<Credentials, StepError> {
    if !trust(&creds.username) || !trust(&creds.password) {
        return Err(StepError::InvalidInput(
            "username or password must not be empty".to_string(),
        ));
    }
    Ok(creds)
}

fn check_user_info(_creds: Credentials) -> Account {
    Account {
        status: "normal".to_string(),
        id: "100".to_string(),
    }
}

fn analyze_token(account: Account) -> Session {
    Session {
        status: account.status,
        id: account.id,
        name: "lhj".to_string(),
        token: "zHcuqhrehduqwexxx".to_string(),
    }
}

fn login(session: Session) -> LoginFeedback {
    tracing::debug!(id = %session.id, user = %session.name, status = %session.status, token = %session.token, "logged in");
    LoginFeedback {
        redirect_url: "http://www.taobao.com/".to_string(),
    }
}

fn redirect(feedback: LoginFeedback) -> Outcome {
    tracing::debug!(url = %feedback.redirect_url, "redirecting");
    Outcome {
        code: "10000".to_string(),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let enter = Pipeline::new()
        .then(check_user_input)
        .then_map(check_user_info)
        .then_map(analyze_token)
        .then_map(login)
        .then_map(redirect);

    let outcome = enter.run(Credentials {
        username: "aa".to_string(),
        password: "bb".to_string(),
    })?;
    println!("login succeeded: {:?}", outcome);

    match enter.run(Credentials {
        username: "aa".to_string(),
        password: String::new(),
    }) {
        Ok(outcome) => println!("unexpected login: {:?}", outcome),
        Err(err) => println!("login rejected: {}", err),
    }

    Ok(())
}
