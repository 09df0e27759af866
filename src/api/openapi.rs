//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Laudo Cautelar Server",
        version = "0.1.0",
        description = "API de laudos cautelares veiculares com cálculo do Índice de Procedência Automotiva (IPA)"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Status endpoints
        api::health::status,
        api::health::ready,
        // Auth
        api::auth::login,
        // Laudos
        api::laudos::listar_laudos,
        api::laudos::obter_laudo,
        api::laudos::buscar_por_placa,
        api::laudos::criar_laudo,
        api::laudos::previa_laudo,
        api::laudos::atualizar_laudo,
        api::laudos::remover_laudo,
        // Fotos
        api::fotos::adicionar_fotos,
        api::fotos::listar_fotos,
        api::fotos::remover_foto,
        // Inspetores
        api::inspetores::listar_inspetores,
        api::inspetores::obter_inspetor,
        api::inspetores::criar_inspetor,
        api::inspetores::atualizar_inspetor,
        api::inspetores::remover_inspetor,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Status
            api::health::StatusResponse,
            api::health::ReadyResponse,
            // Auth
            models::LoginRequest,
            models::LoginResponse,
            // Laudos
            models::LaudoData,
            models::LaudoResponse,
            models::IpaBadge,
            models::IpaResult,
            api::laudos::AtualizarQuery,
            // Fotos
            models::FotoResponse,
            models::FalhaUpload,
            models::UploadOutcome,
            // Inspetores
            models::InspetorResponse,
            models::CriarInspetorRequest,
            models::AtualizarInspetorRequest,
        )
    ),
    tags(
        (name = "Status", description = "Service status endpoints"),
        (name = "Auth", description = "Inspector login"),
        (name = "Laudos", description = "Vehicle inspection reports and IPA scoring"),
        (name = "Fotos", description = "Photo attachments"),
        (name = "Inspetores", description = "Inspector account management")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Add the bearer token security scheme.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
