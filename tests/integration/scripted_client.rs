use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use futures::future::BoxFuture;
use futures::FutureExt;
use wayfinder::{HttpClient, HttpResponse};

/// Answers GETs from a script, in call order.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    responses: Mutex<VecDeque<Option<Result<HttpResponse, String>>>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn then_json(self, status: u16, body: &str) -> Self {
        self.push(Some(Ok(HttpResponse::new(status, body.as_bytes().to_vec()))))
    }

    pub(crate) fn then_network_error(self, reason: &str) -> Self {
        self.push(Some(Err(reason.to_string())))
    }

    /// A response that never arrives.
    pub(crate) fn then_hang(self) -> Self {
        self.push(None)
    }

    fn push(self, response: Option<Result<HttpResponse, String>>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpClient for ScriptedClient {
    fn get(&self, _url: &str) -> BoxFuture<'static, Result<HttpResponse, String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.lock().unwrap().pop_front() {
            Some(Some(response)) => async move { response }.boxed(),
            Some(None) => futures::future::pending().boxed(),
            None => async { Err("no scripted response".to_string()) }.boxed(),
        }
    }
}

/// A PokeAPI list body with the given names.
pub(crate) fn pokemon_body(names: &[&str]) -> String {
    let results: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"{{"name":"{name}","url":"https://pokeapi.co/api/v2/pokemon/{}/"}}"#,
                i + 1
            )
        })
        .collect();
    format!(r#"{{"count":{},"results":[{}]}}"#, names.len(), results.join(","))
}
