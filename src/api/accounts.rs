use crate::api::client::BillingClient;
use crate::domain::account::{AccountInformationType, AccountType};
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    pub async fn create_account_type(&self, account_type: &AccountType) -> Result<i32> {
        self.call("createAccountType", json!({ "accountType": account_type }))
            .await
    }

    pub async fn get_account_type(&self, account_type_id: i32) -> Result<AccountType> {
        self.call("getAccountType", json!({ "accountTypeId": account_type_id }))
            .await
    }

    pub async fn get_all_account_types(&self) -> Result<Vec<AccountType>> {
        self.call("getAllAccountTypes", json!({})).await
    }

    pub async fn update_account_type(&self, account_type: &AccountType) -> Result<()> {
        self.call_void("updateAccountType", json!({ "accountType": account_type }))
            .await
    }

    pub async fn delete_account_type(&self, account_type_id: i32) -> Result<()> {
        self.call_void("deleteAccountType", json!({ "accountTypeId": account_type_id }))
            .await
    }

    pub async fn create_account_information_type(
        &self,
        information_type: &AccountInformationType,
    ) -> Result<i32> {
        self.call(
            "createAccountInformationType",
            json!({ "informationType": information_type }),
        )
        .await
    }

    pub async fn get_account_information_type(
        &self,
        information_type_id: i32,
    ) -> Result<AccountInformationType> {
        self.call(
            "getAccountInformationType",
            json!({ "informationTypeId": information_type_id }),
        )
        .await
    }

    pub async fn get_information_types_for_account_type(
        &self,
        account_type_id: i32,
    ) -> Result<Vec<AccountInformationType>> {
        self.call(
            "getInformationTypesForAccountType",
            json!({ "accountTypeId": account_type_id }),
        )
        .await
    }

    pub async fn update_account_information_type(
        &self,
        information_type: &AccountInformationType,
    ) -> Result<()> {
        self.call_void(
            "updateAccountInformationType",
            json!({ "informationType": information_type }),
        )
        .await
    }

    pub async fn delete_account_information_type(&self, information_type_id: i32) -> Result<()> {
        self.call_void(
            "deleteAccountInformationType",
            json!({ "informationTypeId": information_type_id }),
        )
        .await
    }
}
