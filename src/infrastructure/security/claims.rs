// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);
    build_authenticated_user(ctx)
}

fn build_authenticated_user(ctx: ClaimsContext) -> ApplicationResult<AuthenticatedUser> {
    let missing = |what: &str| ApplicationError::unauthorized(format!("missing {what}"));

    let uid = ctx.user_id.ok_or_else(|| missing("user id"))?;
    let display_name = ctx.display_name.ok_or_else(|| missing("user name"))?;
    let role = ctx.role.ok_or_else(|| missing("role"))?;
    let issued_at = ctx.issued_at.ok_or_else(|| missing("issued_at"))?;
    let expires_at = ctx.expires_at.ok_or_else(|| missing("expires_at"))?;

    let mut capabilities = role.default_capabilities();
    capabilities.extend(ctx.capabilities);

    Ok(AuthenticatedUser {
        id: UserId::new(uid)?,
        display_name,
        role,
        capabilities,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<String>,
    display_name: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    capabilities: HashSet<Capability>,
}

fn date(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(predicate.terms),
            "role" => {
                if let Some(Term::Str(role)) = predicate.terms.first() {
                    self.role = role.parse().ok();
                }
            }
            "issued_at" => self.issued_at = date(&predicate),
            "expires_at" => self.expires_at = date(&predicate),
            "right" => self.handle_right(predicate.terms),
            _ => {}
        }
    }

    fn handle_user(&mut self, terms: Vec<Term>) {
        if let [Term::Str(uid), Term::Str(name)] = terms.as_slice() {
            self.user_id = Some(uid.clone());
            self.display_name = Some(name.clone());
        }
    }

    fn handle_right(&mut self, terms: Vec<Term>) {
        if let [Term::Str(resource), Term::Str(action)] = terms.as_slice() {
            self.capabilities
                .insert(Capability::new(resource.clone(), action.clone()));
        }
    }
}
