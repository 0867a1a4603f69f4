use devfusion_db::test_set;
use devfusion_db::util::{FlattenTransactionResultExt, InspectTransactionError};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::error::Error;
use uuid::Uuid;

use crate::error::{CoreError, Entity};

/// Sets the certification flag of `test_id` using an open connection or transaction.
/// Raising the flag first clears it on every other test set, so at most one holder
/// remains. A concurrent flip that slips past this is rejected by the single
/// certification index and reported as [`CoreError::Conflict`].
pub(crate) async fn flip_certification<C: ConnectionTrait>(
    conn: &C,
    test_id: Uuid,
    make_certification: bool,
) -> Result<(), CoreError> {
    if make_certification {
        let cleared = test_set::Mutation::unset_certification_except(conn, test_id)
            .await
            .map_err(CoreError::from_write)?;
        if cleared > 0 {
            tracing::debug!(%test_id, cleared, "cleared previous certification test");
        }
    }
    let updated = test_set::Mutation::set_certification(conn, test_id, make_certification)
        .await
        .map_err(CoreError::from_write)?;
    if updated == 0 {
        return Err(CoreError::NotFound(Entity::TestSet));
    }
    Ok(())
}

/// Runs [`flip_certification`] in its own transaction
pub async fn set_certification(
    conn: &DatabaseConnection,
    test_id: Uuid,
    make_certification: bool,
) -> Result<(), CoreError> {
    let res = conn
        .transaction::<_, (), CoreError>(|txn| {
            Box::pin(async move { flip_certification(txn, test_id, make_certification).await })
        })
        .await;
    res.inspect_transaction_err(|error| {
        if matches!(error, CoreError::Database(_)) {
            tracing::error!(error = error as &dyn Error, %test_id, "failed to set certification flag");
        }
    })
    .flatten_res()?;
    tracing::info!(%test_id, make_certification, "updated certification flag");
    Ok(())
}
