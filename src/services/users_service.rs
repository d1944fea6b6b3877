use bcrypt::{hash, verify};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::user::{LoginRequest, NewUser, SignupRequest, UserResponse},
    db::repositories::users::UserRepo,
    error::{AppError, ErrorCode},
    validation::user::validate_signup,
};

pub struct UsersService;

impl UsersService {
    pub fn signup(
        conn: &mut PgConnection,
        req: &SignupRequest,
        bcrypt_cost: u32,
    ) -> Result<UserResponse, AppError> {
        validate_signup(&req.username, &req.email, &req.password)?;

        let password_hash = hash(&req.password, bcrypt_cost)?;

        let user = conn.transaction::<_, AppError, _>(|conn| {
            // Application-level check, no unique constraint backs this up.
            if UserRepo::exists_by_email(conn, &req.email)? {
                return Err(AppError::duplicate(
                    ErrorCode::DuplicateEmail,
                    format!("Email {} is already registered", req.email),
                ));
            }

            let new_user = NewUser {
                username: req.username.clone(),
                email: req.email.clone(),
                password_hash: password_hash.clone(),
            };
            Ok(UserRepo::insert(conn, &new_user)?)
        })?;

        Ok(user.into())
    }

    pub fn login(conn: &mut PgConnection, req: &LoginRequest) -> Result<UserResponse, AppError> {
        // Unknown email and wrong password fail identically.
        let user = UserRepo::find_by_email(conn, &req.email)?
            .ok_or_else(|| AppError::auth("Invalid email or password"))?;

        if !verify(&req.password, &user.password_hash)? {
            return Err(AppError::auth("Invalid email or password"));
        }

        Ok(user.into())
    }

    pub fn get_by_id(conn: &mut PgConnection, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = UserRepo::find_by_id(conn, user_id)?
            .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, "User not found"))?;
        Ok(user.into())
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<UserResponse>, AppError> {
        let users = UserRepo::list_all(conn)?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub fn delete(conn: &mut PgConnection, user_id: Uuid) -> Result<(), AppError> {
        conn.transaction::<_, AppError, _>(|conn| {
            if !UserRepo::exists_by_id(conn, user_id)? {
                return Err(AppError::not_found(ErrorCode::UserNotFound, "User not found"));
            }
            UserRepo::delete_by_id(conn, user_id)?;
            Ok(())
        })
    }
}
