use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::get_movie,
        crate::modules::language::handler::get_languages,
    ),
    components(
        schemas(
            crate::modules::movie::dto::MovieResponse,
            crate::modules::movie::dto::MovieStatus,
            crate::modules::language::dto::LanguageResponse,
            crate::common::response::ErrorBody,
        )
    ),
    tags(
        (name = "Movies", description = "Random movie suggestions")
    )
)]
pub struct ApiDoc;
