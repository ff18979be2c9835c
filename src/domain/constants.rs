//! 遠端計費系統共用的識別碼常數。

pub const LANGUAGE_ENGLISH_ID: i32 = 1;
pub const PRIMARY_CURRENCY_ID: i32 = 1;

pub const PERIOD_UNIT_MONTH: i32 = 1;
pub const PERIOD_UNIT_WEEK: i32 = 2;
pub const PERIOD_UNIT_DAY: i32 = 3;

pub const ORDER_LINE_TYPE_ITEM: i32 = 1;
pub const ORDER_BILLING_PRE_PAID: i32 = 1;
pub const ORDER_BILLING_POST_PAID: i32 = 2;
pub const ORDER_CHANGE_TYPE_DEFAULT: i32 = 1;

pub const PAYMENT_METHOD_VISA: i32 = 2;
pub const RESULT_ENTERED: i32 = 4;

pub const CUSTOMER_ROLE_ID: i32 = 5;
pub const PARTNER_ROLE_ID: i32 = 4;
pub const USER_STATUS_ACTIVE: i32 = 1;
pub const EMAIL_DELIVERY_METHOD: i32 = 1;

// Preference type ids (preference 19 is the next invoice number)
pub const PREFERENCE_INVOICE_NUMBER: i32 = 19;
pub const PREFERENCE_PARTNER_DEFAULT_COMMISSION_TYPE: i32 = 56;
pub const PREFERENCE_FORGOT_PASSWORD_EXPIRATION: i32 = 58;
pub const PREFERENCE_CREATE_CREDENTIALS_BY_DEFAULT: i32 = 60;

pub const FUP_CONSUMPTION_FEE: &str = "FEE";

/// 信用卡到期日的格式 (例如 05/2028)
pub const CC_DATE_FORMAT: &str = "%m/%Y";
