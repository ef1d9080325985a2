//! In-memory backend whose answers and failures are set per test

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use brain_client::{Backend, ClientError, Result, UploadFile};
use brain_types::{
    AnalyticsSummary, Document, MaintenanceIssue, Property, PropertyDetail, QueryRequest,
    QueryResult, ServiceStatus, UploadResponse,
};
use tokio::sync::Barrier;

/// How `submit_query` answers
#[derive(Debug, Clone)]
pub enum QueryScript {
    /// Answer "answer to <query>" with no rows
    Echo,
    Fixed(QueryResult),
    Fail,
}

/// How `upload` answers
#[derive(Debug, Clone)]
pub enum UploadScript {
    Respond(UploadResponse),
    TransportError,
}

/// Call counters, one per endpoint
#[derive(Debug, Default)]
pub struct Calls {
    pub properties: AtomicUsize,
    pub maintenance: AtomicUsize,
    pub documents: AtomicUsize,
    pub analytics: AtomicUsize,
    pub query: AtomicUsize,
    pub upload: AtomicUsize,
}

impl Calls {
    /// Number of completed four-way refresh fan-outs (counted on properties)
    pub fn refreshes(&self) -> usize {
        self.properties.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        [
            &self.properties,
            &self.maintenance,
            &self.documents,
            &self.analytics,
            &self.query,
            &self.upload,
        ]
        .iter()
        .map(|c| c.load(Ordering::SeqCst))
        .sum()
    }
}

pub struct ScriptedBackend {
    pub properties: Mutex<Vec<Property>>,
    pub maintenance: Mutex<Vec<MaintenanceIssue>>,
    pub documents: Mutex<Vec<Document>>,
    pub analytics: Mutex<AnalyticsSummary>,
    failing: Mutex<HashSet<&'static str>>,
    read_gate: Mutex<Option<Arc<Barrier>>>,
    query: Mutex<QueryScript>,
    query_delays: Mutex<HashMap<String, Duration>>,
    upload: Mutex<UploadScript>,
    pub queries_seen: Mutex<Vec<String>>,
    pub uploads_seen: Mutex<Vec<(String, String)>>,
    pub calls: Calls,
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self {
            properties: Mutex::new(super::sample_properties()),
            maintenance: Mutex::new(super::sample_maintenance()),
            documents: Mutex::new(super::sample_documents()),
            analytics: Mutex::new(super::sample_analytics()),
            failing: Mutex::new(HashSet::new()),
            read_gate: Mutex::new(None),
            query: Mutex::new(QueryScript::Echo),
            query_delays: Mutex::new(HashMap::new()),
            upload: Mutex::new(UploadScript::Respond(UploadResponse {
                message: "stored".into(),
                status: Some("success".into()),
                document_id: Some(2),
                extracted_data: None,
            })),
            queries_seen: Mutex::new(Vec::new()),
            uploads_seen: Mutex::new(Vec::new()),
            calls: Calls::default(),
        }
    }
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make reads of `resource` fail with a 500
    pub fn fail(&self, resource: &'static str) {
        self.failing.lock().unwrap().insert(resource);
    }

    pub fn recover(&self, resource: &'static str) {
        self.failing.lock().unwrap().remove(resource);
    }

    /// Hold every collection read until `readers` of them are waiting at
    /// once
    pub fn gate_reads(&self, readers: usize) {
        *self.read_gate.lock().unwrap() = Some(Arc::new(Barrier::new(readers)));
    }

    async fn pass_gate(&self) {
        let gate = self.read_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.wait().await;
        }
    }

    pub fn script_query(&self, script: QueryScript) {
        *self.query.lock().unwrap() = script;
    }

    pub fn delay_query(&self, text: &str, delay: Duration) {
        self.query_delays
            .lock()
            .unwrap()
            .insert(text.to_string(), delay);
    }

    pub fn script_upload(&self, script: UploadScript) {
        *self.upload.lock().unwrap() = script;
    }

    fn check(&self, resource: &'static str) -> Result<()> {
        if self.failing.lock().unwrap().contains(resource) {
            Err(ClientError::Status {
                resource,
                status: 500,
            })
        } else {
            Ok(())
        }
    }
}

fn connection_refused() -> ClientError {
    ClientError::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        self.calls.properties.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await;
        self.check("properties")?;
        Ok(self.properties.lock().unwrap().clone())
    }

    async fn list_maintenance(&self) -> Result<Vec<MaintenanceIssue>> {
        self.calls.maintenance.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await;
        self.check("maintenance")?;
        Ok(self.maintenance.lock().unwrap().clone())
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        self.calls.documents.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await;
        self.check("documents")?;
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn analytics(&self) -> Result<AnalyticsSummary> {
        self.calls.analytics.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await;
        self.check("analytics")?;
        Ok(self.analytics.lock().unwrap().clone())
    }

    async fn submit_query(&self, request: &QueryRequest) -> Result<QueryResult> {
        self.calls.query.fetch_add(1, Ordering::SeqCst);
        self.queries_seen
            .lock()
            .unwrap()
            .push(request.query.clone());

        let delay = self.query_delays.lock().unwrap().get(&request.query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let script = self.query.lock().unwrap().clone();
        match script {
            QueryScript::Echo => Ok(QueryResult {
                answer: format!("answer to {}", request.query),
                data: Vec::new(),
                query_type: "echo".into(),
            }),
            QueryScript::Fixed(result) => Ok(result),
            QueryScript::Fail => Err(connection_refused()),
        }
    }

    async fn upload(&self, file: &UploadFile, property_id: &str) -> Result<UploadResponse> {
        self.calls.upload.fetch_add(1, Ordering::SeqCst);
        self.uploads_seen
            .lock()
            .unwrap()
            .push((file.filename().to_string(), property_id.to_string()));

        let script = self.upload.lock().unwrap().clone();
        match script {
            UploadScript::Respond(response) => Ok(response),
            UploadScript::TransportError => Err(connection_refused()),
        }
    }

    async fn property_detail(&self, property_id: &str) -> Result<PropertyDetail> {
        let property = self
            .properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == property_id)
            .cloned()
            .ok_or(ClientError::Status {
                resource: "property",
                status: 404,
            })?;
        let maintenance_history = self
            .maintenance
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.property_id == property_id)
            .cloned()
            .collect();
        Ok(PropertyDetail {
            property,
            maintenance_history,
        })
    }

    async fn service_status(&self) -> Result<ServiceStatus> {
        Ok(ServiceStatus {
            message: "Real Estate Asset Brain API".into(),
            status: "running".into(),
        })
    }
}
