use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CatalogEntryDoc {
    pub descricao: String,
    pub valor: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct NewRecordDoc {
    pub placa: String,
    pub modelo: String,
    pub tipoCliente: String,
    pub descricao: String,
    pub valor: f64,
    pub pago: bool,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct RecordChangesDoc {
    pub placa: Option<String>,
    pub modelo: Option<String>,
    pub tipoCliente: Option<String>,
    pub descricao: Option<String>,
    pub valor: Option<f64>,
    pub pago: Option<bool>,
    pub ativo: Option<bool>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct RecordDoc {
    pub id: i32,
    pub placa: String,
    pub modelo: String,
    pub tipoCliente: String,
    pub descricao: String,
    pub valor: String,
    pub pago: bool,
    pub ativo: bool,
    /// RFC 3339 timestamp at UTC-03:00
    pub dataHora: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::catalog::list,
        crate::routes::records::list,
        crate::routes::records::create,
        crate::routes::records::get,
        crate::routes::records::update,
        crate::routes::records::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CatalogEntryDoc,
            NewRecordDoc,
            RecordChangesDoc,
            RecordDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "catalog"),
        (name = "records")
    )
)]
pub struct ApiDoc;
