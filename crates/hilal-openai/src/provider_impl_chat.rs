use std::{future::Future, pin::Pin, sync::Arc};

use hilal_core::{
    error::{HilalError, Result},
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest},
    model_map::map_model,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = map_model(params.model()).ok_or_else(|| {
                HilalError::InvalidRequest(format!(
                    "backend does not support selected model: {:?}",
                    params.model()
                ))
            })?;

            let temperature = params.temperature;
            let messages = params.into_messages().into_iter().map(Into::into).collect();

            let mut request = ChatCompletionRequest::new(model.into_owned(), messages);
            if let Some(temperature) = temperature {
                request = request.temperature(temperature);
            }

            let mut response = client.chat_completion(request).await?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                id = ?response.id,
                model = %response.model,
                choices = response.choices.len(),
                finish_reason = ?response.choices.first().map(|c| &c.finish_reason),
                "chat completion finished"
            );

            let usage = response.usage.map(|usage| GenericUsageReport {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            });

            // The API already orders choices, but `index` is authoritative.
            response.choices.sort_by_key(|choice| choice.index);

            let refusal = response
                .choices
                .first()
                .filter(|choice| choice.message.content.is_none())
                .and_then(|choice| choice.message.refusal.clone());
            if let Some(refusal) = refusal {
                #[cfg(feature = "tracing")]
                tracing::warn!(%refusal, "Model refused the prompt");

                return Err(HilalError::Refusal(refusal));
            }
            let completions = response
                .choices
                .into_iter()
                .map(|choice| choice.message.into())
                .collect();

            Ok(GenericChatCompletionResponse { completions, usage })
        })
    }
}
