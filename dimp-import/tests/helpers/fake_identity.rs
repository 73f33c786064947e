//! In-memory IdentityService that records calls

use async_trait::async_trait;
use std::sync::Mutex;

use dimp_import::artemis::{ArtemisError, FaceAddition, IdentityService, PersonRegistration};

/// Which call should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    None,
    Registration,
    Face,
}

pub struct FakeIdentityService {
    failure: Failure,
    /// Person codes whose registration is rejected regardless of `failure`
    reject_codes: Vec<String>,
    registrations: Mutex<Vec<PersonRegistration>>,
    faces: Mutex<Vec<FaceAddition>>,
}

impl FakeIdentityService {
    pub fn new() -> Self {
        Self::failing(Failure::None)
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            failure,
            reject_codes: Vec::new(),
            registrations: Mutex::new(Vec::new()),
            faces: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(codes: &[&str]) -> Self {
        Self {
            reject_codes: codes.iter().map(|c| c.to_string()).collect(),
            ..Self::new()
        }
    }

    pub fn registrations(&self) -> Vec<PersonRegistration> {
        self.registrations.lock().unwrap().clone()
    }

    pub fn faces(&self) -> Vec<FaceAddition> {
        self.faces.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.registrations.lock().unwrap().len() + self.faces.lock().unwrap().len()
    }
}

#[async_trait]
impl IdentityService for FakeIdentityService {
    async fn register_person(&self, person: &PersonRegistration) -> Result<String, ArtemisError> {
        self.registrations.lock().unwrap().push(person.clone());

        if self.failure == Failure::Registration || self.reject_codes.contains(&person.person_code) {
            return Err(ArtemisError::Service {
                code: "0x02a00001".to_string(),
                message: "personCode already exists".to_string(),
            });
        }

        Ok(format!("remote-{}", person.person_code))
    }

    async fn add_face(&self, face: &FaceAddition) -> Result<(), ArtemisError> {
        self.faces.lock().unwrap().push(face.clone());

        if self.failure == Failure::Face {
            return Err(ArtemisError::Transport("connection reset by peer".to_string()));
        }

        Ok(())
    }
}
