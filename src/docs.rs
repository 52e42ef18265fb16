use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use todosapp_models::{
    CreateUserDto, HealthResponse, Todo, TodoDto, TokenRequest, TokenResponse, UpdatePasswordDto,
    UpdateUserDto, UserResponse,
};

/// Body of every error response.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health_check,
        crate::modules::auth::controller::create_user,
        crate::modules::auth::controller::login_for_access_token,
        crate::modules::todos::controller::read_all,
        crate::modules::todos::controller::read_todo,
        crate::modules::todos::controller::create_todo,
        crate::modules::todos::controller::update_todo,
        crate::modules::todos::controller::delete_todo,
        crate::modules::admin::controller::read_all,
        crate::modules::admin::controller::delete_todo,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::change_password,
        crate::modules::users::controller::update_user,
    ),
    components(
        schemas(
            HealthResponse,
            CreateUserDto,
            UserResponse,
            TokenRequest,
            TokenResponse,
            Todo,
            TodoDto,
            UpdatePasswordDto,
            UpdateUserDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Authentication", description = "Registration and token issuance"),
        (name = "Todos", description = "The caller's own todos"),
        (name = "Admin", description = "Cross-user todo access for admins"),
        (name = "Users", description = "The caller's profile and password")
    ),
    info(
        title = "Todosapp API",
        version = "0.1.0",
        description = "Multi-tenant todo list backend with bearer token authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/healthy",
            "/auth/",
            "/auth/token",
            "/",
            "/todo/create",
            "/todo/{todo_id}",
            "/admin/todo",
            "/admin/todo/{todo_id}",
            "/user/",
            "/user/password_update",
            "/user/user_update",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
