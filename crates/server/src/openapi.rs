use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponseDoc { pub status: String, pub db_connection: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct CreateUserRequestDoc {
    pub cpf: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `YYYY-MM-DD`
    pub data_nascimento: Option<String>,
}

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i32,
    pub cpf: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub data_nascimento: Option<String>,
}

#[derive(ToSchema)]
pub struct UsersDoc { pub users: Vec<UserDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
        crate::routes::users::list_users,
    ),
    components(
        schemas(
            HealthResponseDoc,
            MessageDoc,
            CreateUserRequestDoc,
            UserDoc,
            UsersDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users")
    )
)]
pub struct ApiDoc;
