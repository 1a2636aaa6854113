use color_eyre::{Result, eyre::WrapErr};

use crate::api::rest::{Gateway, TaskID};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// ID of the task.
    pub id: TaskID,
}

pub async fn close(params: Params, gw: &Gateway) -> Result<()> {
    gw.close(&params.id)
        .await
        .wrap_err_with(|| format!("unable to close task {}", params.id))?;
    println!("closed task {}", params.id);
    Ok(())
}

pub async fn reopen(params: Params, gw: &Gateway) -> Result<()> {
    gw.reopen(&params.id)
        .await
        .wrap_err_with(|| format!("unable to reopen task {}", params.id))?;
    println!("reopened task {}", params.id);
    Ok(())
}

pub async fn delete(params: Params, gw: &Gateway) -> Result<()> {
    gw.delete_task(&params.id)
        .await
        .wrap_err_with(|| format!("unable to delete task {}", params.id))?;
    println!("deleted task {}", params.id);
    Ok(())
}
