use crate::api::client::BillingClient;
use crate::domain::user::{Contact, User, UserCode};
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    pub async fn create_user(&self, user: &User) -> Result<i32> {
        self.call("createUser", json!({ "user": user })).await
    }

    pub async fn get_user(&self, user_id: i32) -> Result<User> {
        self.call("getUserWS", json!({ "userId": user_id })).await
    }

    pub async fn update_user(&self, user: &User) -> Result<()> {
        self.call_void("updateUser", json!({ "user": user })).await
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<()> {
        self.call_void("deleteUser", json!({ "userId": user_id }))
            .await
    }

    pub async fn user_exists_with_name(&self, user_name: &str) -> Result<bool> {
        self.call("userExistsWithName", json!({ "userName": user_name }))
            .await
    }

    pub async fn user_exists_with_id(&self, user_id: i32) -> Result<bool> {
        self.call("userExistsWithId", json!({ "userId": user_id }))
            .await
    }

    pub async fn get_user_id(&self, user_name: &str) -> Result<i32> {
        self.call("getUserId", json!({ "userName": user_name }))
            .await
    }

    pub async fn get_users_in_status(&self, status_id: i32) -> Result<Vec<i32>> {
        self.call("getUsersInStatus", json!({ "statusId": status_id }))
            .await
    }

    pub async fn get_users_not_in_status(&self, status_id: i32) -> Result<Vec<i32>> {
        self.call("getUsersNotInStatus", json!({ "statusId": status_id }))
            .await
    }

    pub async fn get_users_by_status(&self, status_id: i32, in_status: bool) -> Result<Vec<i32>> {
        self.call(
            "getUsersByStatus",
            json!({ "statusId": status_id, "inStatus": in_status }),
        )
        .await
    }

    pub async fn get_user_contacts(&self, user_id: i32) -> Result<Vec<Contact>> {
        self.call("getUserContactsWS", json!({ "userId": user_id }))
            .await
    }

    pub async fn update_user_contact(&self, user_id: i32, contact: &Contact) -> Result<()> {
        self.call_void(
            "updateUserContact",
            json!({ "userId": user_id, "contact": contact }),
        )
        .await
    }

    pub async fn create_user_code(&self, user_code: &UserCode) -> Result<i32> {
        self.call("createUserCode", json!({ "userCode": user_code }))
            .await
    }

    pub async fn update_user_code(&self, user_code: &UserCode) -> Result<()> {
        self.call_void("updateUserCode", json!({ "userCode": user_code }))
            .await
    }

    pub async fn get_user_codes_for_user(&self, user_id: i32) -> Result<Vec<UserCode>> {
        self.call("getUserCodesForUser", json!({ "userId": user_id }))
            .await
    }

    pub async fn get_customers_by_user_code(&self, identifier: &str) -> Result<Vec<i32>> {
        self.call("getCustomersByUserCode", json!({ "identifier": identifier }))
            .await
    }

    pub async fn get_customers_linked_to_user(&self, user_id: i32) -> Result<Vec<i32>> {
        self.call("getCustomersLinkedToUser", json!({ "userId": user_id }))
            .await
    }
}
